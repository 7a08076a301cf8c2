//! Static content tables.

/// Page sections in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    Home,
    About,
    Projects,
    Contact,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Home,
        Section::About,
        Section::Projects,
        Section::Contact,
    ];

    /// Section at `index`, if any.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn index(self) -> usize {
        self as usize
    }

    /// DOM identifier; doubles as the dictionary key for the nav label.
    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Projects => "projects",
            Section::Contact => "contact",
        }
    }
}

/// A showcased project.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub url: &'static str,
}

impl Project {
    /// Card blurb.
    pub fn summary(&self) -> String {
        format!(
            "Innovative solutions in {}, delivering cutting-edge results for clients worldwide.",
            self.title.to_lowercase()
        )
    }
}

pub const PROJECTS: [Project; 3] = [
    Project {
        title: "Web Development",
        url: "/web-development",
    },
    Project {
        title: "Cloud Solutions",
        url: "/cloud-solutions",
    },
    Project {
        title: "Security Analysis",
        url: "/security-analysis",
    },
];

/// Brand icons used for outbound links.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    LinkedIn,
    GitHub,
    PenSquare,
    Facebook,
    Twitter,
    Instagram,
}

impl Icon {
    /// Accessible name of the icon.
    pub fn label(self) -> &'static str {
        match self {
            Icon::LinkedIn => "LinkedIn",
            Icon::GitHub => "GitHub",
            Icon::PenSquare => "Qiita",
            Icon::Facebook => "Facebook",
            Icon::Twitter => "Twitter",
            Icon::Instagram => "Instagram",
        }
    }
}

/// An outbound link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub icon: Icon,
    pub href: &'static str,
    pub class: &'static str,
}

/// Profile links shown in the hero; open in a new tab.
pub const PROFILE_LINKS: [SocialLink; 3] = [
    SocialLink {
        icon: Icon::LinkedIn,
        href: "https://www.linkedin.com/in/toshikisakuta/",
        class: "text-5xl text-blue-400 transition-colors duration-300 hover:text-blue-300",
    },
    SocialLink {
        icon: Icon::GitHub,
        href: "https://github.com/KoenigWolf",
        class: "text-5xl text-gray-300 transition-colors duration-300 hover:text-white",
    },
    SocialLink {
        icon: Icon::PenSquare,
        href: "https://qiita.com/KoenigWolf",
        class: "text-5xl text-green-400 transition-colors duration-300 hover:text-green-300",
    },
];

const FOOTER_SOCIAL_CLASS: &str = "text-3xl transition-colors duration-300 hover:text-pink-300";

/// Placeholder social links in the footer.
pub const FOOTER_SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink {
        icon: Icon::Facebook,
        href: "#",
        class: FOOTER_SOCIAL_CLASS,
    },
    SocialLink {
        icon: Icon::Twitter,
        href: "#",
        class: FOOTER_SOCIAL_CLASS,
    },
    SocialLink {
        icon: Icon::Instagram,
        href: "#",
        class: FOOTER_SOCIAL_CLASS,
    },
];

/// Contact form fields in order.
pub const CONTACT_FIELDS: [&str; 3] = ["name", "email", "message"];

/// How a contact field renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    TextArea,
}

pub fn field_kind(field: &str) -> FieldKind {
    match field {
        "message" => FieldKind::TextArea,
        "email" => FieldKind::Email,
        _ => FieldKind::Text,
    }
}

/// `Your Name`, `Your Email`, ...
pub fn field_placeholder(field: &str) -> String {
    let mut chars = field.chars();
    match chars.next() {
        Some(first) => format!("Your {}{}", first.to_uppercase(), chars.as_str()),
        None => "Your ".to_string(),
    }
}

pub const SITE_TITLE: &str = "Hello World";
pub const OWNER_NAME: &str = "Toshiki Sakuta";
pub const SEND_MESSAGE: &str = "Send Message";

pub const ABOUT_PARAGRAPHS: [&str; 2] = [
    "An engineer from Hyogo Prefecture, I became fascinated with the world of the Web \
     when a friend enjoyed a website I created as a hobby in the days before the iPhone \
     was introduced to the world. He studied information technology at a technical high \
     school and majored in industrial design at university. After graduation, I was \
     involved in the design of electronic circuits for automobiles, and later moved to \
     the IT industry, attracted by the potential of cloud technology.",
    "I started my career in technical support and experienced a wide range of work from \
     networking to security measures, including Azure cloud server construction, \
     security measures, and vulnerability diagnosis through log analysis.",
];

/// Fixed geographic point (Tokyo). Stored with the page state, never rendered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapCenter {
    pub lat: f64,
    pub lng: f64,
}

pub const MAP_CENTER: MapCenter = MapCenter {
    lat: 35.6762,
    lng: 139.6503,
};
