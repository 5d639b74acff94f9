use std::path::{Path, PathBuf};

/// Reviews used by the end-to-end scenarios, in file order.
pub const SAMPLE_REVIEWS: &[(&str, &str, Option<&str>)] = &[
    ("1", "Blender", Some("great product")),
    ("2", "Kettle", Some("terrible experience")),
    ("3", "Blender", Some("it's fine")),
    ("4", "Toaster", None),
    ("5", "Kettle", Some("I love this kettle, works perfectly")),
    ("6", "Blender", Some("Not good at all, broke after a week")),
    ("7", "Toaster", Some("excellent toast every morning")),
    ("8", "Kettle", Some("great product")),
    ("9", "Blender", Some("The lid is blue")),
    ("10", "Toaster", Some("worst purchase ever, awful")),
];

/// Write `rows` as a `REVIEW_ID,PRODUCT,SUMMARY` file; `None` summaries stay empty.
pub fn write_reviews_csv(dir: &Path, rows: &[(&str, &str, Option<&str>)]) -> PathBuf {
    let path = dir.join("customer_reviews.csv");
    let mut writer = csv::Writer::from_path(&path).expect("create csv");
    writer
        .write_record(["REVIEW_ID", "PRODUCT", "SUMMARY"])
        .expect("write header");
    for (id, product, summary) in rows {
        writer
            .write_record([*id, *product, summary.unwrap_or_default()])
            .expect("write row");
    }
    writer.flush().expect("flush csv");
    path
}
