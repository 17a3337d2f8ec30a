//! Result summary

use serde::{Deserialize, Serialize};

use crate::record::AnswerRecord;

/// Overall outcome band, used to pick the result screen's mood
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Grade {
    /// Every answer right
    Perfect,
    /// 70% or more
    Good,
    /// 40% or more
    Fair,
    Low,
}

impl Grade {
    pub fn from_rate(rate: u32) -> Self {
        if rate >= 100 {
            Grade::Perfect
        } else if rate >= 70 {
            Grade::Good
        } else if rate >= 40 {
            Grade::Fair
        } else {
            Grade::Low
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreSummary {
    pub correct: usize,
    pub total: usize,
}

impl ScoreSummary {
    pub fn from_records(records: &[AnswerRecord]) -> Self {
        Self {
            correct: records.iter().filter(|r| r.is_correct).count(),
            total: records.len(),
        }
    }

    /// Percentage of correct answers, rounded half away from zero
    pub fn rate(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        ((self.correct as f64 / self.total as f64) * 100.0).round() as u32
    }

    pub fn grade(&self) -> Grade {
        Grade::from_rate(self.rate())
    }

    pub fn is_perfect(&self) -> bool {
        self.total > 0 && self.correct == self.total
    }
}
