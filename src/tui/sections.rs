//! Top-level sections of the portfolio, shown as tabs.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    #[default]
    Home,
    About,
    Projects,
    Skills,
    Contact,
}

impl Section {
    pub fn all() -> &'static [Section] {
        &[
            Section::Home,
            Section::About,
            Section::Projects,
            Section::Skills,
            Section::Contact,
        ]
    }

    pub fn name(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Projects => "Projects",
            Section::Skills => "Skills",
            Section::Contact => "Contact",
        }
    }

    pub fn index(self) -> usize {
        Self::all().iter().position(|s| *s == self).unwrap_or(0)
    }

    pub fn next(self) -> Section {
        let all = Self::all();
        all[(self.index() + 1) % all.len()]
    }

    pub fn prev(self) -> Section {
        let all = Self::all();
        all[(self.index() + all.len() - 1) % all.len()]
    }

    /// Section bound to a digit key, `'1'` for Home through `'5'` for Contact.
    pub fn from_digit(c: char) -> Option<Section> {
        let n = c.to_digit(10)? as usize;
        n.checked_sub(1).and_then(|i| Self::all().get(i).copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_home() {
        assert_eq!(Section::default(), Section::Home);
    }

    #[test]
    fn test_next_wraps() {
        assert_eq!(Section::Home.next(), Section::About);
        assert_eq!(Section::Contact.next(), Section::Home);
    }

    #[test]
    fn test_prev_wraps() {
        assert_eq!(Section::Home.prev(), Section::Contact);
        assert_eq!(Section::Skills.prev(), Section::Projects);
    }

    #[test]
    fn test_from_digit() {
        assert_eq!(Section::from_digit('1'), Some(Section::Home));
        assert_eq!(Section::from_digit('3'), Some(Section::Projects));
        assert_eq!(Section::from_digit('5'), Some(Section::Contact));
        assert_eq!(Section::from_digit('0'), None);
        assert_eq!(Section::from_digit('6'), None);
        assert_eq!(Section::from_digit('x'), None);
    }

    #[test]
    fn test_index_matches_tab_order() {
        for (i, section) in Section::all().iter().enumerate() {
            assert_eq!(section.index(), i);
        }
    }
}
