use once_cell::sync::Lazy;
use std::borrow::Cow;
use std::collections::HashMap;

static PROJECT_NAMES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("MER286403207-ADNBRA25", "ADN Brasil"),
        ("MER286403208-MER28640", "ADN Argentina"),
        ("MER286403209-ADNCOL25", "ADN Colombia"),
        ("MER286403210-ADNMEX25", "ADN México"),
        ("MER286403211-ADNURU25", "ADN Uruguay"),
        ("MER286403258-CATALAR2", "Leadership Workshops Argentina"),
        ("MER286403267-ADNCHI25", "ADN Chile"),
        ("MER286403269-CATALUR", "Leadership Workshops Uruguay"),
        ("MER286403270-CATALMX", "Leadership Workshops México"),
        ("MER286403271-CATALCO", "Leadership Workshops Colombia"),
        ("MER286403272-CATALCH", "Leadership Workshops Chile"),
        ("MER286403273-CATALBR", "Leadership Workshops Brasil"),
    ])
});

/// Human-readable project name. Unknown codes render as `"({code})"`.
pub fn project_name(code: &str) -> Cow<'static, str> {
    match PROJECT_NAMES.get(code) {
        Some(name) => Cow::Borrowed(*name),
        None => Cow::Owned(format!("({})", code)),
    }
}
