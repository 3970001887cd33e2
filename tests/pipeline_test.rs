use fee_reminders::{process_csv_str, process_table, EmailConfig, Table};
use pretty_assertions::assert_eq;

const HEADER: &str = "Consultant,Prj Code,Employee Status,Date,Activity,Cost (Consultant Curr),Total Hours,Total Cost (Orig Currency),Consultant Currency,Internal ID";

fn csv(rows: &[&str]) -> String {
    let mut out = String::from(HEADER);
    for row in rows {
        out.push('\n');
        out.push_str(row);
    }
    out.push('\n');
    out
}

#[test]
fn test_single_consultant_two_activity_buckets() {
    let input = csv(&[
        "Ana López,PROJ1,AFNM,2025-05-01,Task : Coding,10,5,50,USD,id1",
        "Ana López,PROJ1,AFNM,2025-05-02,Task : Coding,10,3,30,USD,id2",
        "Ana López,PROJ1,AFNM,2025-05-03,Task : Review,20,2,40,USD,id3",
    ]);
    let result = process_csv_str(&input, &EmailConfig::default());

    assert!(result.success, "{}", result.message);
    assert_eq!(result.month.as_deref(), Some("mayo"));
    assert_eq!(result.total_emails, Some(1));
    assert_eq!(result.message, "Se generaron 1 emails para mayo");

    let email = &result.emails[0];
    assert_eq!(email.consultant, "Ana López");
    // No "Last, First" comma, so the whole name is used.
    assert_eq!(email.first_name, "Ana López");
    assert!(!email.is_english);
    assert_eq!(email.subject, "MELI - Fees mayo 2025 Ana López");
    assert!(email.body.contains(
        "(PROJ1)\nProyecto: PROJ1\n- Coding: 8.0 horas @ USD 10.0/hora\n- Review: 2.0 horas @ USD 20.0/hora\n- IDs: id1, id2, id3\n- Subtotal: USD 90.00\n\n"
    ));
    assert!(email.body.contains("TOTAL A FACTURAR: USD 90.00\n"));
}

#[test]
fn test_only_ineligible_rows() {
    let input = csv(&["\"Doe, John\",PROJ1,AFNC,2025-05-01,Coding,10,5,50,USD,id1"]);
    let result = process_csv_str(&input, &EmailConfig::default());

    assert!(!result.success);
    assert_eq!(
        result.message,
        r#"No se encontraron consultores AFNM. Employee Status values: {"AFNC":1}"#
    );
    assert!(result.emails.is_empty());
    assert_eq!(result.month, None);
    assert_eq!(result.total_emails, None);
}

#[test]
fn test_english_consultant() {
    let input = csv(&[
        "\"De Castro Abreu, Silvia\",MER286403207-ADNBRA25,AFNM,02/05/2025,Workshop : Facilitation,100,4,400,EUR,A-1",
    ]);
    let result = process_csv_str(&input, &EmailConfig::default());
    assert!(result.success);

    let email = &result.emails[0];
    assert!(email.is_english);
    assert_eq!(email.first_name, "Silvia");
    assert_eq!(email.subject, "MELI - Fees may 2025 Silvia");
    assert_eq!(
        email.body,
        "MELI - Fees may 2025 Silvia

Hi Silvia, how are you?

I hope you're doing well. Here are the details for may 2025 invoicing:

ADN BRASIL
Project: MER286403207-ADNBRA25
- Facilitation: 4.0 hours @ EUR 100.0/hour
- IDs: A-1
- Subtotal: EUR 400.00

TOTAL TO INVOICE: EUR 400.00

Please remember:
- Upload your invoice to AFN Support form: https://form.jotform.com/243515805505656
- Include the project codes in your invoice

Best regards!"
    );
    // The reporting month itself stays Spanish.
    assert_eq!(result.month.as_deref(), Some("mayo"));
}

#[test]
fn test_missing_status_column() {
    let input = "Consultant,Prj Code,Date\n\"Doe, John\",PROJ1,2025-05-01\n";
    let result = process_csv_str(input, &EmailConfig::default());

    assert!(!result.success);
    assert_eq!(
        result.message,
        r#"Columna 'Employee Status' no encontrada. Columnas disponibles: ["Consultant","Prj Code","Date"]"#
    );
    assert!(result.emails.is_empty());
}

#[test]
fn test_ineligible_rows_never_contribute() {
    let input = csv(&[
        "\"Doe, John\",P1,AFNM,2025-05-01,Coding,10,1,10,USD,keep",
        "\"Doe, John\",P1,AFNC,2025-05-01,Coding,10,99,990,USD,drop",
        "\"Roe, Jane\",P2,EMP,2025-05-01,Coding,10,99,990,USD,drop",
    ]);
    let result = process_csv_str(&input, &EmailConfig::default());

    assert_eq!(result.emails.len(), 1);
    let body = &result.emails[0].body;
    assert!(!body.contains("drop"));
    assert!(body.contains("- Coding: 1.0 horas @ USD 10.0/hora"));
    assert!(body.contains("TOTAL A FACTURAR: USD 10.00"));
}

#[test]
fn test_project_subtotal_sums_across_rates() {
    let input = csv(&[
        "\"Doe, John\",P1,AFNM,2025-06-01,Coding,10,1.5,15,USD,1",
        "\"Doe, John\",P1,AFNM,2025-06-02,Coding,12.5,2,25,USD,2",
        "\"Doe, John\",P1,AFNM,2025-06-03,Coding,10,0.5,5,USD,3",
        "\"Doe, John\",P2,AFNM,2025-06-04,Review,1000,1,\"1,000\",USD,4",
    ]);
    let result = process_csv_str(&input, &EmailConfig::default());
    let body = &result.emails[0].body;

    assert_eq!(result.month.as_deref(), Some("junio"));
    assert!(body.contains(
        "- Coding: 2.0 horas @ USD 10.0/hora\n- Coding: 2.0 horas @ USD 12.5/hora\n"
    ));
    assert!(body.contains("- Subtotal: USD 45.00\n"));
    assert!(body.contains("- Subtotal: USD 1,000.00\n"));
    assert!(body.contains("TOTAL A FACTURAR: USD 1,045.00"));
}

#[test]
fn test_scientific_notation_and_large_amounts() {
    let input = csv(&[
        "\"Doe, John\",P1,AFNM,2025-05-01,Coding,1.5E2,4,6e2,USD,1",
        "\"Roe, Jane\",P2,AFNM,2025-05-02,Review,1,1,10000000000000000000,USD,2",
    ]);
    let result = process_csv_str(&input, &EmailConfig::default());
    assert_eq!(result.total_emails, Some(2));

    let john = &result.emails[0].body;
    assert!(john.contains("- Coding: 4.0 horas @ USD 150.0/hora\n"));
    assert!(john.contains("- Subtotal: USD 600.00\n"));

    let jane = &result.emails[1].body;
    assert!(jane.contains("- Subtotal: USD 10,000,000,000,000,000,000.00\n"));
    assert!(jane.contains("TOTAL A FACTURAR: USD 10,000,000,000,000,000,000.00"));
}

#[test]
fn test_projects_render_in_first_seen_order() {
    let input = csv(&[
        "\"Doe, John\",ZZZ,AFNM,2025-05-01,B,1,1,1,USD,1",
        "\"Doe, John\",AAA,AFNM,2025-05-01,A,1,1,1,USD,2",
        "\"Doe, John\",ZZZ,AFNM,2025-05-01,A,1,1,1,USD,3",
    ]);
    let result = process_csv_str(&input, &EmailConfig::default());
    let body = &result.emails[0].body;

    let zzz = body.find("(ZZZ)").unwrap();
    let aaa = body.find("(AAA)").unwrap();
    assert!(zzz < aaa);
    let b = body.find("- B:").unwrap();
    let a = body.find("- A:").unwrap();
    assert!(b < a);
}

#[test]
fn test_emails_follow_consultant_first_appearance() {
    let input = csv(&[
        "\"Zeta, Zoe\",P1,AFNM,2025-05-01,A,1,1,1,USD,1",
        "\"Alfa, Ana\",P1,AFNM,2025-05-01,A,1,1,1,USD,2",
        "\"Zeta, Zoe\",P2,AFNM,2025-05-01,A,1,1,1,USD,3",
    ]);
    let result = process_csv_str(&input, &EmailConfig::default());
    let names: Vec<_> = result.emails.iter().map(|e| e.first_name.as_str()).collect();
    assert_eq!(names, vec!["Zoe", "Ana"]);
    assert_eq!(result.total_emails, Some(2));
}

#[test]
fn test_config_controls_company_ids_and_language() {
    let config = EmailConfig::from_json_str(
        r#"{"company_name": "ACME", "include_ids": false, "language_overrides": {"Doe, John": "en"}}"#,
    )
    .unwrap();
    let input = csv(&["\"Doe, John\",P1,AFNM,2025-04-10,A,1,1,1,USD,secret-id"]);
    let result = process_csv_str(&input, &config);
    let email = &result.emails[0];

    assert!(email.is_english);
    assert_eq!(email.subject, "ACME - Fees april 2025 John");
    assert!(!email.body.contains("secret-id"));
    assert!(!email.body.contains("IDs:"));
}

#[test]
fn test_in_memory_table() {
    let headers: Vec<String> = [
        "Consultant",
        "Employee Status",
        "Prj Code",
        "Total Hours",
        "Total Cost (Orig Currency)",
    ]
    .iter()
    .map(|h| h.to_string())
    .collect();
    let rows = vec![vec![
        "Doe, John".to_string(),
        "AFNM".to_string(),
        "P1".to_string(),
        "3".to_string(),
        "30".to_string(),
    ]];
    let result = process_table(&Table::new(headers, rows), &EmailConfig::default());

    assert!(result.success);
    // No Date column: reporting month falls back to May.
    assert_eq!(result.month.as_deref(), Some("mayo"));
    let body = &result.emails[0].body;
    assert!(body.contains("- Activity: 3.0 horas @  0.0/hora"));
    assert!(body.contains("- Subtotal:  30.00"));
}

#[test]
fn test_processing_is_deterministic() {
    let input = csv(&[
        "\"Doe, John\",P1,AFNM,2025-05-01,A,1,1.1,1,USD,1",
        "\"Doe, John\",P1,AFNM,2025-05-01,A,1,2.2,1,USD,2",
    ]);
    let config = EmailConfig::default();
    assert_eq!(
        process_csv_str(&input, &config),
        process_csv_str(&input, &config)
    );
}
