use super::{
    BlogPost, Education, ExperienceEntry, LinkState, Profile, Project, ProjectKind, ProjectTimeline, Skill,
    SkillCategory,
};

pub static PROFILE: Profile = Profile {
    name: "Thanseer Jelani",
    initials: "TJ",
    headline: "Full-Stack Developer & Software Engineer",
    summary: "Passionate about creating scalable applications with modern web technologies. \
              Specializing in React, Next.js, TypeScript, Java, and Spring Boot.",
    location: "Bengaluru, Karnataka",
    email: "thanseerjelani@gmail.com",
    phone: "7624841366",
    linkedin: "https://linkedin.com/in/thanseer-jelani-520768255/",
    github: "https://github.com/thanseerjelani",
};

pub static ABOUT: &[&str] = &[
    "I'm a passionate Software Developer with hands-on experience in full-stack development, \
     specializing in modern web technologies. I love creating scalable applications that provide \
     exceptional user experiences.",
    "Currently working at ChampionXI as a Junior Software Developer, where I've contributed to \
     significant performance improvements and user engagement growth. I'm always eager to learn new \
     technologies and take on challenging projects.",
];

pub static EDUCATION: &[Education] = &[Education {
    degree: "Bachelor of Engineering, Computer Science",
    institution: "Visvesvaraya Technological University",
    period: "2019 - 2023",
    location: "Karnataka, India",
}];

pub static FOOTER_TECH: &[&str] = &[
    "React",
    "TypeScript",
    "Java",
    "Spring Boot",
    "Next.js",
    "Tailwind CSS",
    "Vite",
];

pub static SKILLS: &[Skill] = &[
    Skill {
        name: "JavaScript",
        description: "Modern ES6+ development with async/await",
        tags: &["ES6+", "TypeScript", "DOM API"],
        category: SkillCategory::Frontend,
    },
    Skill {
        name: "React.js",
        description: "Building responsive SPAs with React Hooks",
        tags: &["Redux", "Next.js", "Router"],
        category: SkillCategory::Frontend,
    },
    Skill {
        name: "HTML5",
        description: "Semantic and accessible web structures",
        tags: &["SEO", "A11y", "Forms"],
        category: SkillCategory::Frontend,
    },
    Skill {
        name: "CSS3",
        description: "Modern layouts and animations",
        tags: &["Flexbox", "Grid", "SASS"],
        category: SkillCategory::Frontend,
    },
    Skill {
        name: "Tailwind",
        description: "Utility-first CSS framework",
        tags: &["PostCSS", "Design", "UI"],
        category: SkillCategory::Frontend,
    },
    Skill {
        name: "TypeScript",
        description: "Type-safe JavaScript development",
        tags: &["Types", "Interfaces", "Generics"],
        category: SkillCategory::Frontend,
    },
    Skill {
        name: "Node.js",
        description: "Server-side JavaScript development",
        tags: &["Express", "REST", "GraphQL"],
        category: SkillCategory::Backend,
    },
    Skill {
        name: "Java",
        description: "Enterprise application development",
        tags: &["Spring", "JVM", "OOP"],
        category: SkillCategory::Backend,
    },
    Skill {
        name: "Spring Boot",
        description: "Java framework for microservices",
        tags: &["REST", "JPA", "Security"],
        category: SkillCategory::Backend,
    },
    Skill {
        name: "Ethereum",
        description: "Blockchain and smart contract development",
        tags: &["Solidity", "Web3", "DeFi"],
        category: SkillCategory::Backend,
    },
    Skill {
        name: "MySQL",
        description: "Relational database management",
        tags: &["Queries", "Indexing", "Optimization"],
        category: SkillCategory::Database,
    },
    Skill {
        name: "PostgreSQL",
        description: "Advanced relational database",
        tags: &["ACID", "JSON", "Performance"],
        category: SkillCategory::Database,
    },
    Skill {
        name: "Git & GitHub",
        description: "Version control and collaboration",
        tags: &["CI/CD", "Actions", "Git Flow"],
        category: SkillCategory::Tools,
    },
    Skill {
        name: "VS Code",
        description: "Modern code editor with extensions",
        tags: &["Extensions", "Debugging", "IntelliSense"],
        category: SkillCategory::Tools,
    },
    Skill {
        name: "IntelliJ IDEA",
        description: "Powerful IDE for Java development",
        tags: &["Refactoring", "Debugging", "Spring"],
        category: SkillCategory::Tools,
    },
    Skill {
        name: "Vite",
        description: "Fast build tool for modern web development",
        tags: &["HMR", "ESM", "Bundling"],
        category: SkillCategory::Tools,
    },
];

pub static PROJECTS: &[Project] = &[
    Project {
        title: "SalanaPay - Employee Payroll System",
        description: "Leading frontend development of a comprehensive employee payroll management system \
                      that automates salary calculations, bonuses, deductions, and generates digital \
                      payslips with real-time data synchronization.",
        icon: "💰",
        tech: &[
            "React", "TypeScript", "Vite", "React Router", "React Query", "React Hook Form", "Java",
            "Spring Boot", "PostgreSQL", "REST APIs",
        ],
        highlights: &["Real-time Data Sync", "Automated Payroll", "Frontend Leadership", "Backend Integration"],
        timeline: ProjectTimeline::Status("Current Project"),
        live: LinkState::ComingSoon,
        source: LinkState::Private,
        kind: ProjectKind::Professional {
            company: "StarSoftech",
            role: "Frontend Lead Developer",
        },
    },
    Project {
        title: "ChampionXI - Fantasy Sports App",
        description: "Led full-stack development of a future-ready fantasy app with 30% UI performance \
                      improvement and 20% increase in user engagement, handling both frontend \
                      architecture and backend API development.",
        icon: "🏆",
        tech: &[
            "React", "Next.js", "TypeScript", "Tailwind CSS", "Java", "Spring Boot", "PostgreSQL", "REST APIs",
        ],
        highlights: &[
            "30% Performance Boost",
            "20% User Engagement",
            "Full-stack Development",
            "Scalable Architecture",
        ],
        timeline: ProjectTimeline::Status("In Review"),
        live: LinkState::Available("https://championxi.com/"),
        source: LinkState::Private,
        kind: ProjectKind::Professional {
            company: "StarSoftech",
            role: "Full-stack Developer",
        },
    },
    Project {
        title: "DiGiLend - Decentralized Loan Platform",
        description: "Blockchain-based P2P loan platform with digital mortgages built on Ethereum, \
                      connecting lenders to borrowers directly.",
        icon: "🔗",
        tech: &["React", "Node.js", "Ethereum", "Blockchain", "Smart Contracts"],
        highlights: &["Blockchain Integration", "Smart Contracts", "P2P Architecture"],
        timeline: ProjectTimeline::Period("Nov 2023 - Mar 2024"),
        live: LinkState::ComingSoon,
        source: LinkState::Available("https://github.com/thanseerjelani/DiGiLend-DApp"),
        kind: ProjectKind::Personal,
    },
    Project {
        title: "Developer Portfolio Website",
        description: "Modern, responsive portfolio website showcasing projects, skills, and professional \
                      experience with clean UI design and smooth animations.",
        icon: "🌐",
        tech: &["React", "TypeScript", "Tailwind CSS", "Responsive Design"],
        highlights: &["Modern UI/UX", "Responsive Design", "Clean Architecture", "Fast Performance"],
        timeline: ProjectTimeline::Period("Deployed"),
        live: LinkState::Available("https://thanseer-portfolio.netlify.app/"),
        source: LinkState::Available("https://github.com/thanseerChampionXI/my-portfolio"),
        kind: ProjectKind::Personal,
    },
    Project {
        title: "DashForge",
        description: "Comprehensive dashboard application featuring real-time weather updates, latest news \
                      feed, and interactive todo list management in a unified interface.",
        icon: "📊",
        tech: &["React", "TypeScript", "Vite", "Weather API", "News API"],
        highlights: &["Real-time Data", "API Integration", "Modern Dashboard UI", "Multi-feature App"],
        timeline: ProjectTimeline::Status("Deployed"),
        live: LinkState::Available("https://dashforge.netlify.app/"),
        source: LinkState::Available("https://github.com/thanseerjelani/dashforge-dashboard"),
        kind: ProjectKind::Personal,
    },
    Project {
        title: "Expense Tracker",
        description: "Smart budget management application for tracking daily expenses, categorizing \
                      transactions, and visualizing spending patterns with interactive charts.",
        icon: "💳",
        tech: &["React", "TypeScript", "Vite", "Chart.js", "Local Storage"],
        highlights: &["Budget Management", "Data Visualization", "Category Tracking", "Financial Analytics"],
        timeline: ProjectTimeline::Status("In Development"),
        live: LinkState::ComingSoon,
        source: LinkState::Private,
        kind: ProjectKind::Personal,
    },
    Project {
        title: "Recipe Finder",
        description: "Food discovery application that allows users to search, explore, and save favorite \
                      recipes using external APIs with detailed nutritional information.",
        icon: "🍳",
        tech: &["React", "TypeScript", "Vite", "Recipe API", "Responsive Design"],
        highlights: &["Recipe Search", "API Integration", "Save Favorites", "Nutritional Data"],
        timeline: ProjectTimeline::Status("In Development"),
        live: LinkState::ComingSoon,
        source: LinkState::Private,
        kind: ProjectKind::Personal,
    },
    Project {
        title: "Student Management System",
        description: "Multi-role desktop application supporting Administrator, Faculty, and Student roles \
                      for institutional operations.",
        icon: "🎓",
        tech: &["Java", "Java Swing", "MySQL", "JDBC"],
        highlights: &["Multi-role System", "Desktop Application", "Database Integration"],
        timeline: ProjectTimeline::Period("Sep 2022 - Dec 2022"),
        live: LinkState::ComingSoon,
        source: LinkState::Available("https://github.com/thanseerjelani/SMS"),
        kind: ProjectKind::Personal,
    },
];

pub static EXPERIENCE: &[ExperienceEntry] = &[
    ExperienceEntry {
        title: "Junior Software Developer",
        company: "ChampionXI",
        period: "Dec 2024 - Present",
        location: "Remote",
        achievements: &[
            "Led frontend development achieving 30% UI performance improvement",
            "Built reusable UI components shortening development cycles by 25%",
            "Working on backend APIs with Java, Spring Boot, and PostgreSQL",
            "Driving 20% increase in user engagement through feature deployment",
        ],
    },
    ExperienceEntry {
        title: "Web Development Intern",
        company: "PrinstonSMART.com",
        period: "Nov 2022 - Jan 2023",
        location: "Bengaluru, Karnataka",
        achievements: &[
            "Developed dynamic, responsive web applications using modern technologies",
            "Ensured timely delivery following Agile methodologies",
            "Implemented debugging strategies improving application efficiency",
        ],
    },
];

const PLACEHOLDER_AUTHOR: Option<&str> = Some("Thanseer Jelani");

pub static BLOG_POSTS: &[BlogPost] = &[
    BlogPost {
        slug: "react-vite-perfect-stack",
        title: "React + Vite: The Perfect Development Stack",
        excerpt: "Discover why React + Vite has become the go-to combination for building lightning-fast, \
                  modern web applications with superior developer experience.",
        date: "2024-01-20",
        read_time: "7 min read",
        tags: &["React", "Vite", "JavaScript", "Development", "Build Tools"],
        author: PLACEHOLDER_AUTHOR,
        cover_image: Some("/images/reactvite.png"),
        body: &[
            "This is where the content for \"React + Vite: The Perfect Development Stack\" will go.",
            "Topics: instant dev server start, hot module replacement, and production builds.",
        ],
    },
    BlogPost {
        slug: "building-scalable-react-applications",
        title: "Building Scalable React Applications",
        excerpt: "Best practices for creating maintainable and scalable React applications with modern tooling.",
        date: "2024-01-15",
        read_time: "8 min read",
        tags: &["React", "JavaScript", "Best Practices", "Architecture"],
        author: PLACEHOLDER_AUTHOR,
        cover_image: Some("/images/react.png"),
        body: &[
            "This is where the content for \"Building Scalable React Applications\" will go.",
            "Topics: architecture patterns, state management strategies, component organization, \
             and performance optimization.",
        ],
    },
    BlogPost {
        slug: "blockchain-development-guide",
        title: "Getting Started with Blockchain Development",
        excerpt: "A comprehensive guide to understanding blockchain development and building your first dApp.",
        date: "2024-01-10",
        read_time: "10 min read",
        tags: &["Blockchain", "Ethereum", "Web3", "Smart Contracts"],
        author: PLACEHOLDER_AUTHOR,
        cover_image: Some("/images/blockchain.png"),
        body: &[
            "This is where the content for \"Getting Started with Blockchain Development\" will go.",
            "Topics: wallets, smart contracts, test networks, and shipping a first dApp.",
        ],
    },
    BlogPost {
        slug: "typescript-tips-better-code",
        title: "TypeScript Tips for Better Code",
        excerpt: "Advanced TypeScript techniques that will make your code more robust and maintainable.",
        date: "2024-01-05",
        read_time: "9 min read",
        tags: &["TypeScript", "Development", "Tips", "Best Practices"],
        author: PLACEHOLDER_AUTHOR,
        cover_image: None,
        body: &[
            "This is where the content for \"TypeScript Tips for Better Code\" will go.",
            "Topics: narrowing, discriminated unions, generics, and utility types.",
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_has_skills() {
        for category in SkillCategory::ALL {
            assert!(SKILLS.iter().any(|skill| skill.category == category));
        }
    }

    #[test]
    fn available_links_are_absolute() {
        for project in PROJECTS {
            for link in [project.live, project.source] {
                if let Some(url) = link.url() {
                    assert!(url.starts_with("https://"), "{url}");
                }
            }
        }
    }
}
