//! Cause taxonomy and keyword tallying

use std::fmt;

/// A thematic category a site can be working on
///
/// Variants are declared in taxonomy order, which is also the tie-break
/// order when two causes have the same count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Cause {
    Environment,
    Animal,
    Education,
    Healthcare,
    Poverty,
    HumanRights,
    Children,
}

impl Cause {
    /// All causes in declaration order
    pub const ALL: [Cause; 7] = [
        Cause::Environment,
        Cause::Animal,
        Cause::Education,
        Cause::Healthcare,
        Cause::Poverty,
        Cause::HumanRights,
        Cause::Children,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Environment => "environment",
            Self::Animal => "animal",
            Self::Education => "education",
            Self::Healthcare => "healthcare",
            Self::Poverty => "poverty",
            Self::HumanRights => "human_rights",
            Self::Children => "children",
        }
    }

    /// Lowercase substrings that signal this cause
    pub fn triggers(&self) -> &'static [&'static str] {
        match self {
            Self::Environment => &[
                "environment",
                "climate",
                "nature",
                "sustainability",
                "conservation",
                "green",
            ],
            Self::Animal => &["animal", "wildlife", "pet", "species", "habitat"],
            Self::Education => &[
                "education",
                "learning",
                "teaching",
                "school",
                "students",
                "literacy",
            ],
            Self::Healthcare => &[
                "health",
                "medicine",
                "care",
                "hospital",
                "disease",
                "mental health",
            ],
            Self::Poverty => &[
                "poverty",
                "hunger",
                "homeless",
                "basic needs",
                "food security",
                "inequality",
            ],
            Self::HumanRights => &[
                "human rights",
                "justice",
                "freedom",
                "equality",
                "civil rights",
            ],
            Self::Children => &[
                "children",
                "kids",
                "youth",
                "adolescents",
                "future generation",
            ],
        }
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Cause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-cause sentence counts
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CauseTally {
    counts: [u64; Cause::ALL.len()],
}

impl CauseTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self, cause: Cause) -> u64 {
        self.counts[cause.index()]
    }

    pub fn increment(&mut self, cause: Cause) {
        self.counts[cause.index()] += 1;
    }

    /// Adds every count of `other` into this tally
    pub fn merge(&mut self, other: &CauseTally) {
        for (total, count) in self.counts.iter_mut().zip(other.counts.iter()) {
            *total += count;
        }
    }

    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&count| count == 0)
    }

    /// Causes with a non-zero count, highest first, ties in declaration order
    pub fn ranked(&self) -> Vec<(Cause, u64)> {
        let mut ranked: Vec<(Cause, u64)> = Cause::ALL
            .iter()
            .map(|&cause| (cause, self.count(cause)))
            .filter(|&(_, count)| count > 0)
            .collect();

        // Stable sort keeps declaration order among equal counts
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }

    /// The primary and secondary cause, if that many causes were seen at all
    pub fn main_and_secondary(&self) -> (Option<Cause>, Option<Cause>) {
        let ranked = self.ranked();
        let mut causes = ranked.into_iter().map(|(cause, _)| cause);
        (causes.next(), causes.next())
    }
}

/// Counts the causes a single sentence touches
///
/// Each cause is incremented at most once per sentence, however many of its
/// triggers occur; one sentence may touch several causes.
pub fn classify_sentence(sentence: &str, tally: &mut CauseTally) {
    let lowered = sentence.to_lowercase();

    for cause in Cause::ALL {
        if cause
            .triggers()
            .iter()
            .any(|trigger| lowered.contains(trigger))
        {
            tally.increment(cause);
        }
    }
}
