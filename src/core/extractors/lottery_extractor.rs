use std::io::{self, Write};

use anyhow::{Context, Result};
use regex::Regex;

use crate::core::models::{LotteryMatchUnit, LotteryStrategy, TextAnnotation};
use crate::global_constants;

pub struct LotteryExtractor {
    strategy: LotteryStrategy,
    match_unit: LotteryMatchUnit,
    pattern: Regex,
}

impl LotteryExtractor {
    pub fn new(strategy: LotteryStrategy, match_unit: LotteryMatchUnit) -> Result<Self> {
        let pattern = Regex::new(global_constants::LOTTERY_NUMBERS_PATTERN)
            .context("Failed to compile lottery numbers pattern")?;

        log::debug!(
            "{} Using strategy {} over {:?}",
            global_constants::LOG_TAG_LOTTO,
            strategy,
            match_unit
        );

        Ok(Self {
            strategy,
            match_unit,
            pattern,
        })
    }

    /// Echoes progress to `diagnostics` and returns the matched text, if any.
    pub fn extract(
        &self,
        annotations: &[TextAnnotation],
        diagnostics: &mut dyn Write,
    ) -> io::Result<Option<String>> {
        let found = match self.strategy {
            LotteryStrategy::LogOnly => {
                for annotation in annotations {
                    Self::report_candidate(diagnostics, &annotation.description)?;
                }
                None
            }
            LotteryStrategy::PatternMatching => match self.match_unit {
                LotteryMatchUnit::Annotation => annotations
                    .iter()
                    .map(|annotation| annotation.description.as_str())
                    .find(|text| self.pattern.is_match(text))
                    .map(str::to_string),
                LotteryMatchUnit::CombinedText => {
                    let combined = Self::combine_word_annotations(annotations);
                    self.pattern.is_match(&combined).then_some(combined)
                }
            },
        };

        match found {
            Some(text) => {
                Self::report_candidate(diagnostics, &text)?;
                Ok(Some(text))
            }
            None => {
                writeln!(diagnostics, "{}", global_constants::MESSAGE_LOTTO_NOT_FOUND)?;
                Ok(None)
            }
        }
    }

    fn report_candidate(diagnostics: &mut dyn Write, text: &str) -> io::Result<()> {
        writeln!(
            diagnostics,
            "{}{}",
            global_constants::OUTPUT_PREFIX_LOTTO_RETURN,
            text
        )
    }

    // Index 0 is the full block; the words after it are joined back up.
    fn combine_word_annotations(annotations: &[TextAnnotation]) -> String {
        annotations
            .iter()
            .skip(1)
            .map(|annotation| annotation.description.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
