//! Natural-language description of detected objects

use std::collections::HashSet;

/// Sentence used when detection finds nothing
pub const NO_OBJECTS_DETECTED: &str = "No objects detected in the image.";

/// Remove repeated labels, keeping the first occurrence of each
#[must_use]
pub fn dedupe_labels<I, S>(labels: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut seen = HashSet::new();
    labels
        .into_iter()
        .map(Into::into)
        .filter(|label| seen.insert(label.clone()))
        .collect()
}

/// Render a list of distinct labels as a sentence
#[must_use]
pub fn describe_scene(labels: &[String]) -> String {
    match labels {
        [] => NO_OBJECTS_DETECTED.to_string(),
        [only] => format!("In the image, there is a {only}."),
        [first, second] => format!("In the image, there are a {first} and a {second}."),
        [init @ .., last] => format!(
            "In the image, there are a {}, and a {last}.",
            init.join(", a ")
        ),
    }
}
