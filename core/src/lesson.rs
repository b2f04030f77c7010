//! The central **abstraction** the CLI plays.
//!
//! A [`Lesson`] pairs the violating and compliant versions of one principle.
//! The catalog hands out trait objects; callers pick a lesson by asking each
//! one which principle it teaches, so adding a lesson never touches them.

use std::fmt;
use std::str::FromStr;

use solid_common::error::Result;
use solid_common::output::Sink;

use crate::{dip, isp, lsp, ocp, srp};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Principle {
    SingleResponsibility,
    OpenClosed,
    LiskovSubstitution,
    InterfaceSegregation,
    DependencyInversion,
}

impl Principle {
    /// S-O-L-I-D order.
    pub const ALL: [Principle; 5] = [
        Principle::SingleResponsibility,
        Principle::OpenClosed,
        Principle::LiskovSubstitution,
        Principle::InterfaceSegregation,
        Principle::DependencyInversion,
    ];

    pub fn acronym(&self) -> &'static str {
        match self {
            Principle::SingleResponsibility => "SRP",
            Principle::OpenClosed => "OCP",
            Principle::LiskovSubstitution => "LSP",
            Principle::InterfaceSegregation => "ISP",
            Principle::DependencyInversion => "DIP",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Principle::SingleResponsibility => "Single Responsibility",
            Principle::OpenClosed => "Open/Closed",
            Principle::LiskovSubstitution => "Liskov Substitution",
            Principle::InterfaceSegregation => "Interface Segregation",
            Principle::DependencyInversion => "Dependency Inversion",
        }
    }

    /// The toy domain the lesson is told in.
    pub fn domain(&self) -> &'static str {
        match self {
            Principle::SingleResponsibility => "users & logging",
            Principle::OpenClosed => "discounts",
            Principle::LiskovSubstitution => "payments",
            Principle::InterfaceSegregation => "printers",
            Principle::DependencyInversion => "databases",
        }
    }

    pub fn summary(&self) -> &'static str {
        match self {
            Principle::SingleResponsibility => "a type should have one reason to change",
            Principle::OpenClosed => "extend behaviour with new variants, not new branches",
            Principle::LiskovSubstitution => "every variant must honour the whole contract",
            Principle::InterfaceSegregation => "no variant should implement what it cannot do",
            Principle::DependencyInversion => "depend on abstractions handed in from outside",
        }
    }

    fn slug(&self) -> String {
        self.title().to_ascii_lowercase().replace([' ', '/'], "-")
    }
}

impl fmt::Display for Principle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.title(), self.acronym())
    }
}

impl FromStr for Principle {
    type Err = String;

    /// Accepts the acronym (`"lsp"`), the initial (`"l"`) or the kebab-case
    /// title (`"liskov-substitution"`, `"open-closed"`), case-insensitively.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let lower: String = s.trim().to_ascii_lowercase();

        Principle::ALL
            .into_iter()
            .find(|p| {
                let acronym: String = p.acronym().to_ascii_lowercase();
                lower == acronym || lower == acronym[..1] || lower == p.slug()
            })
            .ok_or_else(|| format!("unknown principle: {s}"))
    }
}

/// One principle, told as a violating and a compliant version.
pub trait Lesson {
    fn principle(&self) -> Principle;

    /// Plays the violating version. Its failure, if it has one, is returned
    /// as soon as it happens.
    fn before(&self, sink: &dyn Sink) -> Result<()>;

    /// Plays the compliant version.
    fn after(&self, sink: &dyn Sink) -> Result<()>;
}

/// Every lesson in S-O-L-I-D order.
pub fn catalog() -> Vec<Box<dyn Lesson>> {
    vec![
        Box::new(srp::SingleResponsibility),
        Box::new(ocp::OpenClosed),
        Box::new(lsp::LiskovSubstitution),
        Box::new(isp::InterfaceSegregation),
        Box::new(dip::DependencyInversion),
    ]
}

pub fn find(principle: Principle) -> Option<Box<dyn Lesson>> {
    catalog()
        .into_iter()
        .find(|lesson| lesson.principle() == principle)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;
    use solid_common::output::MemorySink;

    #[test]
    fn parses_acronym_initial_and_title() {
        assert_eq!("lsp".parse::<Principle>(), Ok(Principle::LiskovSubstitution));
        assert_eq!("D".parse::<Principle>(), Ok(Principle::DependencyInversion));
        assert_eq!("open-closed".parse::<Principle>(), Ok(Principle::OpenClosed));
        assert_eq!(
            "Interface-Segregation".parse::<Principle>(),
            Ok(Principle::InterfaceSegregation)
        );
    }

    #[test]
    fn rejects_unknown_principle() {
        let parsed: std::result::Result<Principle, String> = "yagni".parse();
        assert_eq!(parsed, Err("unknown principle: yagni".to_string()));
    }

    #[test]
    fn catalog_follows_solid_order() {
        let order: Vec<Principle> = catalog().iter().map(|l| l.principle()).collect();
        assert_eq!(order, Principle::ALL.to_vec());
    }

    #[test]
    fn find_returns_matching_lesson() {
        for principle in Principle::ALL {
            let lesson = find(principle).expect("every principle has a lesson");
            assert_eq!(lesson.principle(), principle);
        }
    }

    #[test]
    fn every_after_version_succeeds_and_speaks() {
        for lesson in catalog() {
            let sink: MemorySink = MemorySink::new();
            assert!(lesson.after(&sink).is_ok(), "{} failed", lesson.principle());
            assert!(!sink.is_empty(), "{} emitted nothing", lesson.principle());
        }
    }

    #[test]
    fn only_hardwired_before_versions_run_clean() {
        for lesson in catalog() {
            let sink: MemorySink = MemorySink::new();
            let outcome: Result<()> = lesson.before(&sink);
            match lesson.principle() {
                Principle::SingleResponsibility | Principle::DependencyInversion => {
                    assert!(outcome.is_ok())
                }
                other => assert!(outcome.is_err(), "{other} should fail before"),
            }
        }
    }
}
