//! Partial updates to the portfolio document.
//!
//! Every field of [`PortfolioPatch`] is optional: `None` means "leave the
//! current value alone", while a present value replaces it. Lists are
//! replaced wholesale, never merged item by item, so `Some(vec![])`
//! clears a list and is distinct from omitting the field entirely.

use serde::{Deserialize, Serialize};

use super::model::{Experience, PortfolioDocument, Project, Skill};

/// A partial document, as posted by the admin panel.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PortfolioPatch {
    pub hero: Option<HeroPatch>,
    pub about: Option<AboutPatch>,
    pub projects: Option<Vec<Project>>,
    pub experiences: Option<Vec<Experience>>,
    pub contact: Option<ContactPatch>,
}

/// Per-field update of the hero section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HeroPatch {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub cta: Option<String>,
}

/// Update of the about section. Each list is replaced as a whole
/// when present.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AboutPatch {
    pub manifesto: Option<Vec<String>>,
    pub skills: Option<Vec<Skill>>,
}

/// Per-field update of the contact section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactPatch {
    pub email: Option<String>,
    pub telegram: Option<String>,
    pub linkedin: Option<String>,
}

impl PortfolioPatch {
    /// Applies this patch to `current`, returning the updated document.
    ///
    /// Pure: neither input is modified. The empty patch is the identity.
    pub fn apply(&self, current: &PortfolioDocument) -> PortfolioDocument {
        let mut doc = current.clone();

        if let Some(hero) = &self.hero {
            if let Some(title) = &hero.title {
                doc.hero.title = title.clone();
            }
            if let Some(subtitle) = &hero.subtitle {
                doc.hero.subtitle = subtitle.clone();
            }
            if let Some(cta) = &hero.cta {
                doc.hero.cta = cta.clone();
            }
        }

        if let Some(about) = &self.about {
            if let Some(manifesto) = &about.manifesto {
                doc.about.manifesto = manifesto.clone();
            }
            if let Some(skills) = &about.skills {
                doc.about.skills = skills.clone();
            }
        }

        if let Some(projects) = &self.projects {
            doc.projects = projects.clone();
        }

        if let Some(experiences) = &self.experiences {
            doc.experiences = experiences.clone();
        }

        if let Some(contact) = &self.contact {
            if let Some(email) = &contact.email {
                doc.contact.email = email.clone();
            }
            if let Some(telegram) = &contact.telegram {
                doc.contact.telegram = telegram.clone();
            }
            if let Some(linkedin) = &contact.linkedin {
                doc.contact.linkedin = linkedin.clone();
            }
        }

        doc
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_patch_is_identity() {
        let doc = PortfolioDocument::default();

        let updated = PortfolioPatch::default().apply(&doc);

        assert_eq!(updated, doc);
    }

    #[test]
    fn test_hero_patch_merges_per_field() {
        let doc = PortfolioDocument::default();
        let patch = PortfolioPatch {
            hero: Some(HeroPatch {
                title: Some("New Title".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        };

        let updated = patch.apply(&doc);

        assert_eq!(updated.hero.title, "New Title");
        assert_eq!(updated.hero.subtitle, doc.hero.subtitle);
        assert_eq!(updated.hero.cta, doc.hero.cta);
    }

    #[test]
    fn test_contact_patch_merges_per_field() {
        let doc = PortfolioDocument::default();
        let patch = PortfolioPatch {
            contact: Some(ContactPatch {
                email: Some("new@example.com".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        };

        let updated = patch.apply(&doc);

        assert_eq!(updated.contact.email, "new@example.com");
        assert_eq!(updated.contact.telegram, doc.contact.telegram);
        assert_eq!(updated.contact.linkedin, doc.contact.linkedin);
    }

    #[test]
    fn test_explicit_empty_skills_clears_list() {
        let doc = PortfolioDocument::default();
        assert!(!doc.about.skills.is_empty());

        let patch = PortfolioPatch {
            about: Some(AboutPatch {
                skills: Some(Vec::new()),
                ..Default::default()
            }),
            ..Default::default()
        };

        let updated = patch.apply(&doc);

        assert!(updated.about.skills.is_empty());
        // The sibling field stays untouched.
        assert_eq!(updated.about.manifesto, doc.about.manifesto);
    }

    #[test]
    fn test_omitted_skills_retained() {
        let doc = PortfolioDocument::default();
        let patch = PortfolioPatch {
            about: Some(AboutPatch {
                manifesto: Some(vec!["Only this".to_string()]),
                skills: None,
            }),
            ..Default::default()
        };

        let updated = patch.apply(&doc);

        assert_eq!(updated.about.manifesto, vec!["Only this".to_string()]);
        assert_eq!(updated.about.skills, doc.about.skills);
    }

    #[test]
    fn test_projects_replaced_wholesale() {
        let doc = PortfolioDocument::default();
        let replacement = vec![Project {
            id: 42,
            title: "Single Project".to_string(),
            category: "Test".to_string(),
            description: "The only one left".to_string(),
            image: "/img/42.png".to_string(),
            tags: vec!["rust".to_string()],
            link: Some("https://example.com".to_string()),
        }];
        let patch = PortfolioPatch {
            projects: Some(replacement.clone()),
            ..Default::default()
        };

        let updated = patch.apply(&doc);

        assert_eq!(updated.projects, replacement);
        // Everything else keeps the old values.
        assert_eq!(updated.experiences, doc.experiences);
        assert_eq!(updated.hero, doc.hero);
    }

    #[test]
    fn test_deserialize_distinguishes_omitted_from_empty() {
        let with_empty: PortfolioPatch =
            serde_json::from_str(r#"{"about":{"skills":[]}}"#).unwrap();
        let omitted: PortfolioPatch = serde_json::from_str(r#"{"about":{}}"#).unwrap();

        assert_eq!(
            with_empty.about.as_ref().unwrap().skills,
            Some(Vec::new())
        );
        assert!(omitted.about.as_ref().unwrap().skills.is_none());
    }

    #[test]
    fn test_deserialize_ignores_unknown_fields() {
        let patch: PortfolioPatch =
            serde_json::from_str(r#"{"hero":{"title":"X"},"extra":true}"#).unwrap();

        assert_eq!(patch.hero.unwrap().title.as_deref(), Some("X"));
    }
}
