//! Typed, read-only page content and the filters the skill and project views
//! run over it.

pub mod data;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum SkillCategory {
    Frontend,
    Backend,
    Database,
    Tools,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 4] = [
        Self::Frontend,
        Self::Backend,
        Self::Database,
        Self::Tools,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Frontend => "frontend",
            Self::Backend => "backend",
            Self::Database => "database",
            Self::Tools => "tools",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.as_str() == value)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Frontend => "Frontend",
            Self::Backend => "Backend",
            Self::Database => "Database",
            Self::Tools => "Tools",
        }
    }
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Skill {
    pub name: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub category: SkillCategory,
}

impl Skill {
    /// Case-insensitive substring match on the name or any tag.
    pub fn matches(&self, query: &str) -> bool {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }

        self.name.to_lowercase().contains(&needle)
            || self
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(&needle))
    }
}

/// Where a project link points, if anywhere.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LinkState {
    Available(&'static str),
    Private,
    ComingSoon,
}

impl LinkState {
    pub fn url(self) -> Option<&'static str> {
        match self {
            Self::Available(url) => Some(url),
            Self::Private | Self::ComingSoon => None,
        }
    }

    pub fn unavailable_label(self) -> Option<&'static str> {
        match self {
            Self::Available(_) => None,
            Self::Private => Some("Private repository"),
            Self::ComingSoon => Some("Deploying soon..."),
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ProjectKind {
    Professional {
        company: &'static str,
        role: &'static str,
    },
    Personal,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ProjectTimeline {
    Status(&'static str),
    Period(&'static str),
}

impl ProjectTimeline {
    pub fn label(self) -> &'static str {
        match self {
            Self::Status(value) | Self::Period(value) => value,
        }
    }
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub tech: &'static [&'static str],
    pub highlights: &'static [&'static str],
    pub timeline: ProjectTimeline,
    pub live: LinkState,
    pub source: LinkState,
    pub kind: ProjectKind,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ProjectTab {
    #[default]
    All,
    Professional,
    Personal,
}

impl ProjectTab {
    pub const ALL: [ProjectTab; 3] = [Self::All, Self::Professional, Self::Personal];

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All Projects",
            Self::Professional => "Professional",
            Self::Personal => "Personal",
        }
    }

    pub fn includes(self, project: &Project) -> bool {
        match self {
            Self::All => true,
            Self::Professional => matches!(project.kind, ProjectKind::Professional { .. }),
            Self::Personal => matches!(project.kind, ProjectKind::Personal),
        }
    }
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ExperienceEntry {
    pub title: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub location: &'static str,
    pub achievements: &'static [&'static str],
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Education {
    pub degree: &'static str,
    pub institution: &'static str,
    pub period: &'static str,
    pub location: &'static str,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Profile {
    pub name: &'static str,
    pub initials: &'static str,
    pub headline: &'static str,
    pub summary: &'static str,
    pub location: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub linkedin: &'static str,
    pub github: &'static str,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct BlogPost {
    pub slug: &'static str,
    pub title: &'static str,
    pub excerpt: &'static str,
    /// ISO `YYYY-MM-DD`.
    pub date: &'static str,
    pub read_time: &'static str,
    pub tags: &'static [&'static str],
    pub author: Option<&'static str>,
    pub cover_image: Option<&'static str>,
    pub body: &'static [&'static str],
}

impl BlogPost {
    /// `2024-01-20` becomes `January 20, 2024`. Unparseable dates are shown
    /// as written.
    pub fn display_date(&self) -> String {
        const MONTHS: [&str; 12] = [
            "January", "February", "March", "April", "May", "June", "July", "August", "September",
            "October", "November", "December",
        ];

        parse_iso_date(self.date)
            .and_then(|(year, month, day)| {
                let name = MONTHS.get(month.checked_sub(1)?)?;
                Some(format!("{name} {day}, {year}"))
            })
            .unwrap_or_else(|| self.date.to_string())
    }
}

fn parse_iso_date(value: &str) -> Option<(u32, usize, u32)> {
    let mut parts = value.splitn(3, '-');
    let year = parts.next()?.parse().ok()?;
    let month = parts.next()?.parse().ok()?;
    let day = parts.next()?.parse().ok()?;
    Some((year, month, day))
}

pub fn filter_skills<'a>(
    skills: &'a [Skill],
    query: &str,
    category: Option<SkillCategory>,
) -> Vec<&'a Skill> {
    skills
        .iter()
        .filter(|skill| category.map_or(true, |category| skill.category == category))
        .filter(|skill| skill.matches(query))
        .collect()
}

pub fn filter_projects(projects: &[Project], tab: ProjectTab) -> Vec<&Project> {
    projects.iter().filter(|project| tab.includes(project)).collect()
}

pub fn find_post<'a>(posts: &'a [BlogPost], slug: &str) -> Option<&'a BlogPost> {
    posts.iter().find(|post| post.slug == slug)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skill(name: &'static str, tags: &'static [&'static str], category: SkillCategory) -> Skill {
        Skill {
            name,
            description: "",
            tags,
            category,
        }
    }

    #[test]
    fn query_matches_name_prefix_without_tag_hit() {
        let skills = [
            skill("React.js", &["Redux", "Router"], SkillCategory::Frontend),
            skill("Java", &["Spring", "JVM"], SkillCategory::Backend),
        ];

        let found = filter_skills(&skills, "React", None);

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "React.js");
    }

    #[test]
    fn query_matches_tags_case_insensitively() {
        let skills = [skill("Ethereum", &["Solidity", "Web3"], SkillCategory::Backend)];

        assert_eq!(filter_skills(&skills, "web3", None).len(), 1);
        assert_eq!(filter_skills(&skills, "  SOLID ", None).len(), 1);
    }

    #[test]
    fn blank_query_keeps_everything_in_category() {
        let skills = [
            skill("MySQL", &[], SkillCategory::Database),
            skill("Vite", &[], SkillCategory::Tools),
        ];

        assert_eq!(filter_skills(&skills, "   ", None).len(), 2);
        let tools = filter_skills(&skills, "", Some(SkillCategory::Tools));
        assert_eq!(tools.len(), 1);
        assert_eq!(tools[0].name, "Vite");
    }

    #[test]
    fn no_match_yields_empty_result() {
        assert!(filter_skills(data::SKILLS, "cobol", None).is_empty());
        assert!(filter_skills(&[], "", None).is_empty());
    }

    #[test]
    fn project_tabs_partition_the_list() {
        let all = filter_projects(data::PROJECTS, ProjectTab::All);
        let professional = filter_projects(data::PROJECTS, ProjectTab::Professional);
        let personal = filter_projects(data::PROJECTS, ProjectTab::Personal);

        assert_eq!(all.len(), data::PROJECTS.len());
        assert_eq!(professional.len() + personal.len(), all.len());
        assert!(professional
            .iter()
            .all(|project| matches!(project.kind, ProjectKind::Professional { .. })));
    }

    #[test]
    fn link_state_exposes_url_only_when_available() {
        assert_eq!(LinkState::Available("https://a.dev").url(), Some("https://a.dev"));
        assert_eq!(LinkState::Private.url(), None);
        assert_eq!(LinkState::ComingSoon.unavailable_label(), Some("Deploying soon..."));
    }

    #[test]
    fn posts_resolve_by_slug() {
        let post = find_post(data::BLOG_POSTS, "typescript-tips-better-code").expect("known slug");

        assert_eq!(post.title, "TypeScript Tips for Better Code");
        assert!(find_post(data::BLOG_POSTS, "missing").is_none());
    }

    #[test]
    fn display_date_spells_out_the_month() {
        let post = &data::BLOG_POSTS[0];
        assert_eq!(post.display_date(), "January 20, 2024");

        let odd = BlogPost {
            date: "soon",
            ..post.clone()
        };
        assert_eq!(odd.display_date(), "soon");
    }

    #[test]
    fn slugs_are_unique() {
        let mut slugs: Vec<_> = data::BLOG_POSTS.iter().map(|post| post.slug).collect();
        slugs.sort_unstable();
        slugs.dedup();

        assert_eq!(slugs.len(), data::BLOG_POSTS.len());
    }
}
