//! Command enablement derived from the displayed list length.
//! These are UI hints; the store itself treats out-of-range commands as no-ops.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandGuards {
    pub can_add: bool,
    pub can_remove: bool,
}

impl CommandGuards {
    pub fn for_len(len: usize, max_displayed: usize) -> Self {
        Self {
            can_add: len < max_displayed,
            can_remove: len > 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guards_at_bounds() {
        assert_eq!(
            CommandGuards::for_len(0, 10),
            CommandGuards { can_add: true, can_remove: false }
        );
        assert_eq!(
            CommandGuards::for_len(5, 10),
            CommandGuards { can_add: true, can_remove: true }
        );
        assert_eq!(
            CommandGuards::for_len(10, 10),
            CommandGuards { can_add: false, can_remove: true }
        );
    }
}
