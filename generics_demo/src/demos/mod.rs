//! Each demo runs in isolation with its own local state and prints its
//! results to stdout.

mod backpack;
mod callable;
mod component;
mod map;
mod pad;
mod scale;

use std::num::ParseIntError;

use generics_common::SlotError;
use generics_core::config::Demos;
use generics_dom::DomError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DemoError {
    #[error(transparent)]
    Dom(#[from] DomError),
    #[error(transparent)]
    Slot(#[from] SlotError),
    #[error(transparent)]
    ParseInt(#[from] ParseIntError),
    #[error("unknown demo: {0:?}")]
    UnknownDemo(String),
}

#[derive(Copy, Clone, Debug)]
pub struct Demo {
    pub name: &'static str,
    pub run: fn(&Demos) -> Result<(), DemoError>,
}

pub const DEMOS: &[Demo] = &[
    Demo {
        name: "pad",
        run: pad::run,
    },
    Demo {
        name: "backpack",
        run: backpack::run,
    },
    Demo {
        name: "callable",
        run: callable::run,
    },
    Demo {
        name: "map",
        run: map::run,
    },
    Demo {
        name: "scale",
        run: scale::run,
    },
    Demo {
        name: "component",
        run: component::run,
    },
];

/// Returns the demo called `name`, or all demos if `name` is `None`.
pub fn select(name: Option<&str>) -> Result<&'static [Demo], DemoError> {
    let Some(name) = name else {
        return Ok(DEMOS);
    };

    DEMOS
        .iter()
        .position(|demo| demo.name == name)
        .map(|index| &DEMOS[index..=index])
        .ok_or_else(|| DemoError::UnknownDemo(name.to_owned()))
}

#[cfg(test)]
mod tests {
    use generics_core::config::Demos;

    use super::{select, DemoError, DEMOS};

    #[test]
    fn select_all() {
        assert_eq!(select(None).unwrap().len(), DEMOS.len());
    }

    #[test]
    fn select_by_name() {
        let selected = select(Some("scale")).unwrap();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].name, "scale");
    }

    #[test]
    fn select_unknown() {
        let err = select(Some("nope")).unwrap_err();
        assert!(matches!(err, DemoError::UnknownDemo(name) if name == "nope"));
    }

    #[test]
    fn all_demos_run_with_defaults() {
        let config = Demos::default();
        for demo in DEMOS {
            (demo.run)(&config).unwrap();
        }
    }
}
