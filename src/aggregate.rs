use crate::types::{ActivityBucket, ActivityKey, CleanRecord, Consultants};

/// Group eligible records into consultant -> project -> (activity, rate).
///
/// Every level keeps first-seen order. Hours add up per bucket, cost adds
/// up per project, and every row's internal id is appended to its project.
/// A project's currency is whatever the latest row said.
pub fn aggregate(records: &[CleanRecord]) -> Consultants {
    let mut consultants = Consultants::new();
    for r in records {
        let project = consultants
            .entry(r.consultant.clone())
            .or_default()
            .entry(r.project_code.clone())
            .or_default();
        project.currency = r.currency.clone();

        let bucket = project
            .activities
            .entry(ActivityKey::new(&r.activity, r.rate))
            .or_insert_with(|| ActivityBucket {
                activity: r.activity.clone(),
                rate: r.rate,
                hours: 0.0,
                currency: r.currency.clone(),
            });
        bucket.hours += r.hours;

        project.internal_ids.push(r.internal_id.clone());
        project.total_cost += r.cost;
    }
    consultants
}
