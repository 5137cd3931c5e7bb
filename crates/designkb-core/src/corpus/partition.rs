//! Partition families and their closed sets of partition names
//!
//! A partition is either a design domain (`style`, `color`, ...) or a target
//! technology stack (`react`, `flutter`, ...). Names are matched exactly and
//! case-sensitively.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which corpus family a query runs against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Family {
    Domain,
    Stack,
}

impl Family {
    pub fn as_str(&self) -> &'static str {
        match self {
            Family::Domain => "domain",
            Family::Stack => "stack",
        }
    }

    /// Directory name of this family under a corpus root
    pub fn dir_name(&self) -> &'static str {
        self.as_str()
    }

    /// Every partition of this family, in declared order
    pub fn partitions(&self) -> Vec<Partition> {
        match self {
            Family::Domain => Domain::ALL.iter().copied().map(Partition::Domain).collect(),
            Family::Stack => Stack::ALL.iter().copied().map(Partition::Stack).collect(),
        }
    }

    /// Every partition name of this family, in declared order
    pub fn partition_names(&self) -> Vec<&'static str> {
        match self {
            Family::Domain => Domain::ALL.iter().map(Domain::as_str).collect(),
            Family::Stack => Stack::ALL.iter().map(Stack::as_str).collect(),
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Design knowledge domains
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Domain {
    Style,
    Typography,
    Color,
    Product,
    Landing,
    Chart,
    Ux,
    Prompt,
}

impl Domain {
    pub const ALL: [Domain; 8] = [
        Domain::Style,
        Domain::Typography,
        Domain::Color,
        Domain::Product,
        Domain::Landing,
        Domain::Chart,
        Domain::Ux,
        Domain::Prompt,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Domain::Style => "style",
            Domain::Typography => "typography",
            Domain::Color => "color",
            Domain::Product => "product",
            Domain::Landing => "landing",
            Domain::Chart => "chart",
            Domain::Ux => "ux",
            Domain::Prompt => "prompt",
        }
    }
}

impl FromStr for Domain {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Domain::ALL
            .iter()
            .copied()
            .find(|d| d.as_str() == s)
            .ok_or(())
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Target technology stacks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Stack {
    HtmlTailwind,
    React,
    Nextjs,
    Vue,
    Nuxtjs,
    NuxtUi,
    Svelte,
    Swiftui,
    ReactNative,
    Flutter,
}

impl Stack {
    pub const ALL: [Stack; 10] = [
        Stack::HtmlTailwind,
        Stack::React,
        Stack::Nextjs,
        Stack::Vue,
        Stack::Nuxtjs,
        Stack::NuxtUi,
        Stack::Svelte,
        Stack::Swiftui,
        Stack::ReactNative,
        Stack::Flutter,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Stack::HtmlTailwind => "html-tailwind",
            Stack::React => "react",
            Stack::Nextjs => "nextjs",
            Stack::Vue => "vue",
            Stack::Nuxtjs => "nuxtjs",
            Stack::NuxtUi => "nuxt-ui",
            Stack::Svelte => "svelte",
            Stack::Swiftui => "swiftui",
            Stack::ReactNative => "react-native",
            Stack::Flutter => "flutter",
        }
    }
}

impl FromStr for Stack {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Stack::ALL
            .iter()
            .copied()
            .find(|st| st.as_str() == s)
            .ok_or(())
    }
}

impl fmt::Display for Stack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single partition of the corpus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Partition {
    Domain(Domain),
    Stack(Stack),
}

impl Partition {
    pub fn family(&self) -> Family {
        match self {
            Partition::Domain(_) => Family::Domain,
            Partition::Stack(_) => Family::Stack,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Partition::Domain(d) => d.as_str(),
            Partition::Stack(s) => s.as_str(),
        }
    }

    /// File name holding this partition's entries, relative to its family directory
    pub fn file_name(&self) -> String {
        format!("{}.toml", self.as_str())
    }
}

impl fmt::Display for Partition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
