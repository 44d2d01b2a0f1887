use serde::{Deserialize, Serialize};

/// Task priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// Colored dot shown next to the priority
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::High => "🔴",
            Self::Medium => "🟡",
            Self::Low => "🟢",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }

    pub fn all() -> &'static [Priority] {
        &[Priority::High, Priority::Medium, Priority::Low]
    }
}

/// Task category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Self work")]
    SelfWork,
    #[serde(rename = "Follow-up")]
    FollowUp,
    #[serde(rename = "Take action")]
    TakeAction,
}

impl Category {
    /// Display value, also used in config files
    pub fn to_tag(&self) -> &'static str {
        match self {
            Self::SelfWork => "Self work",
            Self::FollowUp => "Follow-up",
            Self::TakeAction => "Take action",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Self::SelfWork => "💼",
            Self::FollowUp => "📞",
            Self::TakeAction => "⚡",
        }
    }

    pub fn all() -> &'static [Category] {
        &[Category::SelfWork, Category::FollowUp, Category::TakeAction]
    }
}

/// Completion status filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Pending,
    Completed,
}

impl StatusFilter {
    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All Tasks",
            Self::Pending => "Pending",
            Self::Completed => "Completed",
        }
    }

    /// Next value in the selector (wraps around)
    pub fn next(&self) -> Self {
        match self {
            Self::All => Self::Pending,
            Self::Pending => Self::Completed,
            Self::Completed => Self::All,
        }
    }
}

/// UI colour band derived from overall efficiency
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Neutral,
    Red,
    Yellow,
    Green,
}

/// UI mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    Normal,
    AddingTask,
}

/// Cycle an optional selector through `None` ("all") and every value in `values`
pub fn cycle_option<T: Copy + PartialEq>(current: Option<T>, values: &[T]) -> Option<T> {
    match current {
        None => values.first().copied(),
        Some(value) => {
            let idx = values.iter().position(|v| *v == value);
            match idx {
                Some(i) if i + 1 < values.len() => Some(values[i + 1]),
                _ => None,
            }
        }
    }
}
