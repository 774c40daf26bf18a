//! Prompts for an external text generator and the deterministic text used
//! when it is unavailable.
//!
//! Generation is optional. [`narrate`] never fails: any [`GenerationError`]
//! is logged and replaced by the caller's fallback text.

use std::sync::atomic::{AtomicU64, Ordering};

use ank_base::{CoreNumbers, Language};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::dynamic::DynamicAnalysis;
use crate::error::GenerationError;
use crate::report::NumerologyReport;

pub const MAX_SUMMARY_YOGAS: usize = 4;
pub const MAX_SUMMARY_RECURRENCES: usize = 3;

/// Seam to the external language-generation service.
pub trait TextGenerator {
    fn generate(&self, prompt: &str) -> Result<String, GenerationError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NarrativeSource {
    Generated,
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Narrative {
    pub text: String,
    pub source: NarrativeSource,
}

/// Generated text, or `fallback` when generation fails or returns nothing.
pub fn narrate(generator: &dyn TextGenerator, prompt: &str, fallback: &str) -> Narrative {
    settle(generator.generate(prompt), fallback)
}

fn settle(result: Result<String, GenerationError>, fallback: &str) -> Narrative {
    match result {
        Ok(text) if !text.trim().is_empty() => Narrative {
            text,
            source: NarrativeSource::Generated,
        },
        Ok(_) => {
            log::warn!("text generator returned nothing, using fallback");
            fallback_narrative(fallback)
        }
        Err(e) => {
            log::warn!("{e}, using fallback");
            fallback_narrative(fallback)
        }
    }
}

fn fallback_narrative(fallback: &str) -> Narrative {
    Narrative {
        text: fallback.to_string(),
        source: NarrativeSource::Fallback,
    }
}

/// Identifies one request issued through a [`PromptSlot`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

/// A slot where each new request supersedes the previous one. Responses
/// arriving for a superseded ticket are dropped.
#[derive(Debug, Default)]
pub struct PromptSlot {
    latest: AtomicU64,
}

impl PromptSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&self) -> Ticket {
        Ticket(self.latest.fetch_add(1, Ordering::AcqRel) + 1)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.latest.load(Ordering::Acquire) == ticket.0
    }

    /// `None` when `ticket` has been superseded.
    pub fn resolve(
        &self,
        ticket: Ticket,
        result: Result<String, GenerationError>,
        fallback: &str,
    ) -> Option<Narrative> {
        if !self.is_current(ticket) {
            log::debug!("dropping response for superseded request {}", ticket.0);
            return None;
        }
        Some(settle(result, fallback))
    }

    /// Issue a request and resolve it in one step.
    pub fn run(
        &self,
        generator: &dyn TextGenerator,
        prompt: &str,
        fallback: &str,
    ) -> Option<Narrative> {
        let ticket = self.begin();
        let result = generator.generate(prompt);
        self.resolve(ticket, result, fallback)
    }
}

/// `a`, `a and b`, `a, b, and c`.
pub fn join_list<S: AsRef<str>>(items: &[S], conj: &str) -> String {
    match items {
        [] => String::new(),
        [one] => one.as_ref().to_string(),
        [a, b] => format!("{} {conj} {}", a.as_ref(), b.as_ref()),
        [init @ .., last] => {
            let head: Vec<&str> = init.iter().map(|s| s.as_ref()).collect();
            format!("{}, {conj} {}", head.join(", "), last.as_ref())
        }
    }
}

/// `05 May 2024`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d %b %Y").to_string()
}

/// Sentence summary of a dynamic analysis, usable as-is or as input to a
/// rephrasing generator.
pub fn dynamic_summary(analysis: &DynamicAnalysis) -> String {
    let mut parts = Vec::new();

    let layers: Vec<String> = analysis
        .active
        .iter()
        .map(|(level, n)| format!("{} {n}", level.name()))
        .collect();
    parts.push(format!(
        "For {}, your active layers are {}.",
        format_date(analysis.date),
        if layers.is_empty() { "none".to_string() } else { join_list(&layers, "and") }
    ));

    if analysis.yogas.is_empty() {
        parts.push("No new yogas arise solely from today's overlays.".to_string());
    } else {
        let items: Vec<String> = analysis
            .yogas
            .iter()
            .take(MAX_SUMMARY_YOGAS)
            .map(|f| {
                if f.formed_by.is_empty() {
                    f.yoga.name.clone()
                } else {
                    let by: Vec<&str> = f.formed_by.iter().map(|l| l.key()).collect();
                    format!("{} (via {})", f.yoga.name, join_list(&by, "and"))
                }
            })
            .collect();
        parts.push(format!("Newly formed yogas: {}.", join_list(&items, "and")));
    }

    if !analysis.recurrences.is_empty() {
        let items: Vec<String> = analysis
            .recurrences
            .iter()
            .take(MAX_SUMMARY_RECURRENCES)
            .map(|r| format!("#{} appears {}×: {}", r.digit, r.occurrences, r.influence))
            .collect();
        parts.push(format!(
            "Recurring numbers influenced by dasha: {}",
            items.join(" | ")
        ));
    }

    if let Some(n) = analysis.dominant_number {
        parts.push(format!(
            "Overall tone today leans toward number {n}. Align plans with its qualities where possible."
        ));
    }

    parts.join(" ")
}

/// Prompt asking for a short strengths-and-challenges summary of the
/// foundational chart. `None` when the chart has no yogas and no recurring
/// numbers to talk about.
pub fn foundational_prompt(report: &NumerologyReport) -> Option<String> {
    if report.yogas.is_empty() && report.recurrences.is_empty() {
        return None;
    }
    let mut p = String::from(
        "You are a Vedic numerologist. Based on the following foundational chart analysis, \
         write a 2-4 sentence summary of the person's key strengths and challenges.\n\n",
    );
    if report.yogas.is_empty() {
        p.push_str("No significant foundational yogas are present.\n");
    } else {
        p.push_str("Foundational Yogas Present:\n");
        for y in &report.yogas {
            p.push_str(&format!("- {}: {}\n", y.name, y.description));
        }
    }
    if !report.recurrences.is_empty() {
        p.push_str("\nInfluence of Recurring Numbers:\n");
        for r in &report.recurrences {
            p.push_str(&format!(
                "- Number {} (appears {} times): {}\n",
                r.digit, r.occurrences, r.influence
            ));
        }
    }
    p.push_str(&format!(
        "\nUser's Basic Number: {}, Destiny Number: {}.",
        report.core.basic, report.core.destiny
    ));
    p.push_str("\nSummarize the most important takeaways for the user in a gentle and empowering tone.");
    Some(p)
}

fn language_label(lang: Language) -> &'static str {
    match lang {
        Language::English => "English",
        Language::Hindi => "Hindi",
        Language::Hinglish => "Hinglish",
    }
}

/// Prompt for the holistic Basic/Destiny story. Non-premium requests carry a
/// length limit.
pub fn story_prompt(name: &str, core: &CoreNumbers, lang: Language, premium: bool) -> String {
    let mut p = format!(
        "**Your Persona: KarmAnk, a wise, mystical, and warm numerology guide.**\n\
         **Your Task:** Create a holistic narrative for {name}. Weave their Basic Number ({basic}) \
         and Destiny Number ({destiny}) into a single, captivating story. Do NOT simply repeat the \
         core insight. Instead, tell a story about how these two energies work together in their \
         life's journey.\n\
         **Tonal Guidelines:** Use mystical, warm, playful, and empowering language.\n\
         **Language:** {language}.\n",
        basic = core.basic,
        destiny = core.destiny,
        language = language_label(lang),
    );
    if !premium {
        p.push_str(
            "**Constraint: Your response must be a complete story between 200 and 300 words.**\n",
        );
    }
    p.push_str(&format!("**Begin the holistic story for {name}...**"));
    p
}
