use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{PushErr, Result};

/// The reserved label that carries the identity of a metric.
pub const METRIC_NAME_LABEL: &str = "__name__";

/// Grammar every label name must match. The value of the `__name__` label is
/// name-like and must match it as well.
pub const LABEL_NAME_PATTERN: &str = "^[a-zA-Z_:][a-zA-Z0-9_:]*$";

lazy_static! {
    static ref LABEL_NAME_RE: Regex = Regex::new(LABEL_NAME_PATTERN).unwrap();
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Label {
    name: String,
    value: String,
}

impl Label {
    pub fn from(name: &str, value: &str) -> Label {
        Label {
            name: name.to_string(),
            value: value.to_string(),
        }
    }

    pub fn new(name: String, value: String) -> Label {
        Label { name, value }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

impl From<&Label> for crate::proto::Label {
    fn from(l: &Label) -> Self {
        crate::proto::Label {
            name: l.name.clone(),
            value: l.value.clone(),
        }
    }
}

impl From<&crate::proto::Label> for Label {
    fn from(l: &crate::proto::Label) -> Self {
        Label {
            name: l.name.clone(),
            value: l.value.clone(),
        }
    }
}

/// A plain sequence of labels.
///
/// Duplicate names are kept as-is; deduplication is the caller's concern and
/// the merge of client-level and metric-level labels never folds them.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Labels(Vec<Label>);

impl Labels {
    pub fn new() -> Labels {
        Labels(Vec::new())
    }

    pub fn from_vec(labels: Vec<Label>) -> Labels {
        Labels(labels)
    }

    pub fn add(&mut self, label: Label) {
        self.0.push(label)
    }

    pub fn append(&mut self, other: &Labels) {
        self.0.extend_from_slice(&other.0)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn vec(&self) -> &Vec<Label> {
        &self.0
    }

    /// Check every label name against [`LABEL_NAME_PATTERN`], and the value
    /// of the `__name__` label against the same pattern.
    ///
    /// All-or-nothing: the first offending label aborts the check.
    pub fn validate(&self) -> Result<()> {
        for label in self.0.iter() {
            if !LABEL_NAME_RE.is_match(&label.name) {
                return Err(PushErr::LabelName(label.name.clone(), LABEL_NAME_PATTERN));
            }
            if label.name == METRIC_NAME_LABEL && !LABEL_NAME_RE.is_match(&label.value) {
                return Err(PushErr::MetricName(label.value.clone(), LABEL_NAME_PATTERN));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use crate::common::label::{Label, Labels, LABEL_NAME_PATTERN, METRIC_NAME_LABEL};
    use crate::error::PushErr;

    fn labels_of(pairs: &[(&str, &str)]) -> Labels {
        let mut labels = Labels::new();
        for (name, value) in pairs {
            labels.add(Label::from(name, value));
        }
        labels
    }

    #[test]
    fn accepts_valid_names() {
        let labels = labels_of(&[
            ("env", "prod"),
            ("_private", "x"),
            ("name:spaced", "y"),
            ("Upper9", "value can be anything !@#"),
        ]);
        assert!(labels.validate().is_ok());
    }

    #[test]
    fn rejects_bad_leading_character() {
        let labels = labels_of(&[("1bad", "x")]);
        match labels.validate() {
            Err(PushErr::LabelName(name, pattern)) => {
                assert_eq!(name, "1bad");
                assert_eq!(pattern, LABEL_NAME_PATTERN);
            }
            other => panic!("expected LabelName error, got {:?}", other),
        }
    }

    #[test]
    fn rejects_bad_inner_character() {
        let labels = labels_of(&[("env", "prod"), ("bad-name", "x")]);
        assert!(matches!(labels.validate(), Err(PushErr::LabelName(name, _)) if name == "bad-name"));
    }

    #[test]
    fn rejects_empty_name() {
        let labels = labels_of(&[("", "x")]);
        assert!(labels.validate().is_err());
    }

    #[test]
    fn name_label_value_is_name_like() {
        let labels = labels_of(&[(METRIC_NAME_LABEL, "request count")]);
        match labels.validate() {
            Err(PushErr::MetricName(value, _)) => assert_eq!(value, "request count"),
            other => panic!("expected MetricName error, got {:?}", other),
        }

        let labels = labels_of(&[(METRIC_NAME_LABEL, "request_count")]);
        assert!(labels.validate().is_ok());
    }

    #[test]
    fn duplicate_names_are_kept() {
        let mut labels = labels_of(&[("env", "prod")]);
        labels.append(&labels_of(&[("env", "staging")]));
        assert_eq!(labels.len(), 2);
        assert!(labels.validate().is_ok());
    }
}
