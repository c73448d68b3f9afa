//! Profile README generation: pure string templating over a small
//! profile description, mirroring the layout popular profile READMEs use.

/// A skill rendered as a devicon badge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skill {
    pub name: String,
    pub icon: String,
}

const DEVICON_ROOT: &str = "https://raw.githubusercontent.com/devicons/devicon/master/icons";

/// Known skills and their devicon paths.
pub const SKILL_CATALOG: &[(&str, &str)] = &[
    ("JavaScript", "javascript/javascript-original.svg"),
    ("TypeScript", "typescript/typescript-original.svg"),
    ("React", "react/react-original.svg"),
    ("Node.js", "nodejs/nodejs-original.svg"),
    ("Python", "python/python-original.svg"),
    ("Java", "java/java-original.svg"),
    ("HTML5", "html5/html5-original.svg"),
    ("CSS3", "css3/css3-original.svg"),
    ("Vue.js", "vuejs/vuejs-original.svg"),
    ("Angular", "angularjs/angularjs-original.svg"),
    ("Rust", "rust/rust-original.svg"),
    ("Go", "go/go-original.svg"),
];

/// Looks a skill up in the catalog by name, case-insensitively.
pub fn catalog_skill(name: &str) -> Option<Skill> {
    SKILL_CATALOG
        .iter()
        .find(|(n, _)| n.eq_ignore_ascii_case(name))
        .map(|(n, path)| Skill {
            name: (*n).to_string(),
            icon: format!("{DEVICON_ROOT}/{path}"),
        })
}

/// Everything that goes into a generated profile README.
///
/// Empty string fields are simply left out of the rendered document.
#[derive(Debug, Clone)]
pub struct ReadmeProfile {
    pub name: String,
    pub title: String,
    pub description: String,
    pub location: String,
    pub website: String,
    pub email: String,
    pub github: String,
    pub linkedin: String,
    pub twitter: String,
    pub include_stats: bool,
    pub include_widgets: bool,
    pub skills: Vec<Skill>,
}

impl Default for ReadmeProfile {
    fn default() -> Self {
        Self {
            name: String::new(),
            title: String::new(),
            description: String::new(),
            location: String::new(),
            website: String::new(),
            email: String::new(),
            github: String::new(),
            linkedin: String::new(),
            twitter: String::new(),
            include_stats: true,
            include_widgets: true,
            skills: Vec::new(),
        }
    }
}

impl ReadmeProfile {
    /// Adds a skill; returns false if one with the same name is already
    /// present.
    pub fn add_skill(&mut self, skill: Skill) -> bool {
        if self.skills.iter().any(|s| s.name == skill.name) {
            return false;
        }
        self.skills.push(skill);
        true
    }

    /// Renders the README as Markdown (with the usual inline HTML).
    pub fn render(&self) -> String {
        let mut content = String::new();
        let name = if self.name.is_empty() {
            "Your Name"
        } else {
            self.name.as_str()
        };
        content.push_str(&format!("<h1 align=\"center\">Hi 👋, I'm {name}</h1>\n"));

        if !self.title.is_empty() {
            content.push_str(&format!("<h3 align=\"center\">{}</h3>\n\n", self.title));
        }
        if !self.description.is_empty() {
            content.push_str(&format!(
                "<p align=\"center\">{}</p>\n\n",
                self.description
            ));
        }

        let mut contacts = Vec::new();
        if !self.location.is_empty() {
            contacts.push(format!("📍 {}", self.location));
        }
        if !self.website.is_empty() {
            contacts.push(format!("🌐 [Website]({})", self.website));
        }
        if !self.email.is_empty() {
            contacts.push(format!("📧 {}", self.email));
        }
        if !contacts.is_empty() {
            content.push_str(&format!(
                "<p align=\"center\">{}</p>\n\n",
                contacts.join(" • ")
            ));
        }

        let mut socials = Vec::new();
        if !self.github.is_empty() {
            socials.push(format!(
                "<a href=\"https://github.com/{}\"><img src=\"https://img.shields.io/badge/GitHub-100000?style=for-the-badge&logo=github&logoColor=white\" alt=\"GitHub\"/></a>",
                self.github
            ));
        }
        if !self.linkedin.is_empty() {
            socials.push(format!(
                "<a href=\"https://linkedin.com/in/{}\"><img src=\"https://img.shields.io/badge/LinkedIn-0077B5?style=for-the-badge&logo=linkedin&logoColor=white\" alt=\"LinkedIn\"/></a>",
                self.linkedin
            ));
        }
        if !self.twitter.is_empty() {
            socials.push(format!(
                "<a href=\"https://twitter.com/{}\"><img src=\"https://img.shields.io/badge/Twitter-1DA1F2?style=for-the-badge&logo=twitter&logoColor=white\" alt=\"Twitter\"/></a>",
                self.twitter
            ));
        }
        if !socials.is_empty() {
            content.push_str(&format!(
                "<p align=\"center\">\n{}\n</p>\n\n",
                socials.join("\n")
            ));
        }

        if !self.skills.is_empty() {
            content.push_str("## 🛠️ Technologies & Tools\n\n");
            content.push_str("<p align=\"center\">\n");
            for skill in &self.skills {
                content.push_str(&format!(
                    "  <img src=\"{}\" alt=\"{}\" width=\"40\" height=\"40\"/>\n",
                    skill.icon, skill.name
                ));
            }
            content.push_str("</p>\n\n");
        }

        if self.include_stats && !self.github.is_empty() {
            content.push_str("## 📊 GitHub Stats\n\n");
            content.push_str("<div align=\"center\">\n");
            content.push_str(&format!(
                "  <img src=\"https://github-readme-stats.vercel.app/api?username={}&theme=dark&hide_border=false&include_all_commits=true&count_private=true\" alt=\"GitHub Stats\"/>\n",
                self.github
            ));
            content.push_str(&format!(
                "  <img src=\"https://github-readme-streak-stats.herokuapp.com/?user={}&theme=dark&hide_border=false\" alt=\"GitHub Streak\"/>\n",
                self.github
            ));
            content.push_str(&format!(
                "  <img src=\"https://github-readme-stats.vercel.app/api/top-langs/?username={}&theme=dark&hide_border=false&include_all_commits=true&count_private=true&layout=compact\" alt=\"Top Languages\"/>\n",
                self.github
            ));
            content.push_str("</div>\n\n");
        }

        if self.include_widgets && !self.github.is_empty() {
            content.push_str("## 🏆 GitHub Trophies\n\n");
            content.push_str("<div align=\"center\">\n");
            content.push_str(&format!(
                "  <img src=\"https://github-profile-trophy.vercel.app/?username={}&theme=darkhub&no-frame=false&no-bg=false&margin-w=4\" alt=\"GitHub Trophies\"/>\n",
                self.github
            ));
            content.push_str("</div>\n\n");

            content.push_str("## 📈 Contribution Graph\n\n");
            content.push_str("<div align=\"center\">\n");
            content.push_str(&format!(
                "  <img src=\"https://github-readme-activity-graph.vercel.app/graph?username={}&theme=github-compact\" alt=\"Contribution Graph\"/>\n",
                self.github
            ));
            content.push_str("</div>\n\n");
        }

        if !self.github.is_empty() {
            content.push_str("---\n\n");
            content.push_str("<div align=\"center\">\n");
            content.push_str(&format!(
                "  <img src=\"https://komarev.com/ghpvc/?username={}&label=Profile%20views&color=0e75b6&style=flat\" alt=\"Profile Views\"/>\n",
                self.github
            ));
            content.push_str("</div>\n");
        }

        content
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_profile_renders_greeting_only() {
        let profile = ReadmeProfile::default();
        let rendered = profile.render();
        assert_eq!(
            rendered,
            "<h1 align=\"center\">Hi 👋, I'm Your Name</h1>\n"
        );
    }

    #[test]
    fn contact_line_joins_with_separator() {
        let profile = ReadmeProfile {
            name: "Ada".to_string(),
            location: "London".to_string(),
            email: "ada@example.com".to_string(),
            ..Default::default()
        };
        let rendered = profile.render();
        assert!(rendered.contains("📍 London • 📧 ada@example.com"));
    }

    #[test]
    fn github_handle_enables_stats_and_widgets() {
        let profile = ReadmeProfile {
            name: "Ada".to_string(),
            github: "ada".to_string(),
            ..Default::default()
        };
        let rendered = profile.render();
        assert!(rendered.contains("## 📊 GitHub Stats"));
        assert!(rendered.contains("## 🏆 GitHub Trophies"));
        assert!(rendered.contains("github-readme-stats.vercel.app/api?username=ada"));
        assert!(rendered.contains("komarev.com/ghpvc/?username=ada"));
    }

    #[test]
    fn toggles_disable_their_sections() {
        let profile = ReadmeProfile {
            github: "ada".to_string(),
            include_stats: false,
            include_widgets: false,
            ..Default::default()
        };
        let rendered = profile.render();
        assert!(!rendered.contains("GitHub Stats"));
        assert!(!rendered.contains("Trophies"));
        // The visitor badge stays: it only needs a handle.
        assert!(rendered.contains("Profile%20views"));
    }

    #[test]
    fn duplicate_skill_is_rejected() {
        let mut profile = ReadmeProfile::default();
        let rust = catalog_skill("rust").unwrap();
        assert!(profile.add_skill(rust.clone()));
        assert!(!profile.add_skill(rust));
        assert_eq!(profile.skills.len(), 1);
    }

    #[test]
    fn skills_render_as_icons() {
        let mut profile = ReadmeProfile {
            name: "Ada".to_string(),
            ..Default::default()
        };
        profile.add_skill(catalog_skill("TypeScript").unwrap());
        let rendered = profile.render();
        assert!(rendered.contains("## 🛠️ Technologies & Tools"));
        assert!(rendered.contains("typescript/typescript-original.svg"));
        assert!(rendered.contains("alt=\"TypeScript\" width=\"40\" height=\"40\""));
    }

    #[test]
    fn unknown_skill_is_not_in_catalog() {
        assert!(catalog_skill("COBOL").is_none());
        assert!(catalog_skill("rust").is_some());
    }
}
