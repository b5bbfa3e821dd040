/// Named page sections, in document order.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum SectionId {
    #[default]
    Home,
    About,
    Experience,
    Projects,
    Skills,
    Blog,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 7] = [
        Self::Home,
        Self::About,
        Self::Experience,
        Self::Projects,
        Self::Skills,
        Self::Blog,
        Self::Contact,
    ];

    /// The element id of the section on the home view.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Experience => "experience",
            Self::Projects => "projects",
            Self::Skills => "skills",
            Self::Blog => "blog",
            Self::Contact => "contact",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|section| section.as_str() == value)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Experience => "Experience",
            Self::Projects => "Projects",
            Self::Skills => "Skills",
            Self::Blog => "Blog",
            Self::Contact => "Contact",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_resolve_back_to_sections() {
        for section in SectionId::ALL {
            assert_eq!(SectionId::from_str(section.as_str()), Some(section));
        }
        assert_eq!(SectionId::from_str("footer"), None);
    }

    #[test]
    fn home_is_the_default_and_first() {
        assert_eq!(SectionId::default(), SectionId::Home);
        assert_eq!(SectionId::ALL[0], SectionId::Home);
    }
}
