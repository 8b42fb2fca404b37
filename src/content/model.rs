//! The portfolio document and its built-in defaults.

use serde::{Deserialize, Serialize};

/// All editable content of the site. Exactly one document exists,
/// stored at a fixed path managed by [`super::ContentStore`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioDocument {
    pub hero: Hero,
    pub about: About,
    pub projects: Vec<Project>,
    pub experiences: Vec<Experience>,
    pub contact: Contact,
}

/// Landing section headline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hero {
    pub title: String,
    pub subtitle: String,
    pub cta: String,
}

/// About section: manifesto paragraphs and the skill bars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct About {
    pub manifesto: Vec<String>,
    pub skills: Vec<Skill>,
}

/// A single skill bar. `level` is a percentage (0-100); the color
/// fields are CSS class names consumed by the frontend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: u8,
    pub color: String,
    #[serde(rename = "bgColor")]
    pub bg_color: String,
}

/// A portfolio entry. `id` must be unique within the document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub category: String,
    pub description: String,
    pub image: String,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

/// A work history entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub period: String,
    pub role: String,
    pub company: String,
    pub achievements: Vec<String>,
}

/// Contact section handles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub email: String,
    pub telegram: String,
    pub linkedin: String,
}

impl Default for PortfolioDocument {
    /// The seed document written to disk on first access. Every field
    /// is populated, so a load reconciled against this default can
    /// never return a partially-filled document.
    fn default() -> Self {
        Self {
            hero: Hero {
                title: "Crafting digital worlds".to_string(),
                subtitle: "Product Designer | Creative Developer".to_string(),
                cta: "Dive in".to_string(),
            },
            about: About {
                manifesto: vec![
                    "I build digital products that do more than work - they captivate."
                        .to_string(),
                    "Every project is a story told through interaction, visual language and \
                     flawless performance. I believe in the power of detail, and that the best \
                     interface is the one you feel rather than merely see."
                        .to_string(),
                ],
                skills: vec![
                    Skill {
                        name: "Product Design".to_string(),
                        level: 95,
                        color: "text-neon-cyan".to_string(),
                        bg_color: "bg-neon-cyan".to_string(),
                    },
                    Skill {
                        name: "Frontend Development".to_string(),
                        level: 90,
                        color: "text-neon-turquoise".to_string(),
                        bg_color: "bg-neon-turquoise".to_string(),
                    },
                    Skill {
                        name: "UI/UX Design".to_string(),
                        level: 92,
                        color: "text-neon-lime".to_string(),
                        bg_color: "bg-neon-lime".to_string(),
                    },
                    Skill {
                        name: "3D Graphics".to_string(),
                        level: 75,
                        color: "text-neon-purple".to_string(),
                        bg_color: "bg-neon-purple".to_string(),
                    },
                    Skill {
                        name: "Motion Design".to_string(),
                        level: 88,
                        color: "text-neon-orange".to_string(),
                        bg_color: "bg-neon-orange".to_string(),
                    },
                ],
            },
            projects: vec![
                Project {
                    id: 1,
                    title: "Luxury E-Commerce Platform".to_string(),
                    category: "Product Design".to_string(),
                    description: "Premium platform for luxury brands with an immersive shopping \
                                  experience"
                        .to_string(),
                    image: "/api/placeholder/800/600".to_string(),
                    tags: vec![
                        "React".to_string(),
                        "Next.js".to_string(),
                        "Three.js".to_string(),
                        "GSAP".to_string(),
                    ],
                    link: None,
                },
                Project {
                    id: 2,
                    title: "Creative Agency Website".to_string(),
                    category: "Web Development".to_string(),
                    description: "Cinematic site with parallax effects and 3D elements"
                        .to_string(),
                    image: "/api/placeholder/800/600".to_string(),
                    tags: vec![
                        "Next.js".to_string(),
                        "Framer Motion".to_string(),
                        "Tailwind".to_string(),
                    ],
                    link: None,
                },
                Project {
                    id: 3,
                    title: "Mobile Banking App".to_string(),
                    category: "UX/UI Design".to_string(),
                    description: "Innovative design for a next-generation finance app"
                        .to_string(),
                    image: "/api/placeholder/800/600".to_string(),
                    tags: vec![
                        "Figma".to_string(),
                        "Prototyping".to_string(),
                        "Design System".to_string(),
                    ],
                    link: None,
                },
                Project {
                    id: 4,
                    title: "Immersive Exhibition".to_string(),
                    category: "Interactive Design".to_string(),
                    description: "Virtual exhibition with WebGL shaders and interactive elements"
                        .to_string(),
                    image: "/api/placeholder/800/600".to_string(),
                    tags: vec![
                        "WebGL".to_string(),
                        "Three.js".to_string(),
                        "Shaders".to_string(),
                    ],
                    link: None,
                },
            ],
            experiences: vec![
                Experience {
                    period: "2022 — Present".to_string(),
                    role: "Senior Product Designer".to_string(),
                    company: "Tech Innovation Lab".to_string(),
                    achievements: vec![
                        "Led design for 3 major product launches with 500K+ users".to_string(),
                        "Established design system used across 15+ products".to_string(),
                        "Increased user engagement by 40% through UX improvements".to_string(),
                    ],
                },
                Experience {
                    period: "2020 — 2022".to_string(),
                    role: "Creative Developer".to_string(),
                    company: "Digital Studio".to_string(),
                    achievements: vec![
                        "Developed 20+ premium websites for luxury brands".to_string(),
                        "Created innovative WebGL experiences for brand campaigns".to_string(),
                        "Mentored junior developers and designers".to_string(),
                    ],
                },
                Experience {
                    period: "2018 — 2020".to_string(),
                    role: "UI/UX Designer".to_string(),
                    company: "Startup Hub".to_string(),
                    achievements: vec![
                        "Designed mobile apps used by 1M+ users".to_string(),
                        "Collaborated with cross-functional teams on product strategy".to_string(),
                        "Won 3 design awards for innovative solutions".to_string(),
                    ],
                },
            ],
            contact: Contact {
                email: "hello@portfolio.com".to_string(),
                telegram: "@username".to_string(),
                linkedin: "linkedin.com/in/username".to_string(),
            },
        }
    }
}
