use shared::domain::{ContactChannel, ContactChannelKind, Icon, SectionHeading, SocialLink};

pub const HEADING: SectionHeading = SectionHeading {
    eyebrow: "Contact",
    title: "Let's",
    accent: "Connect",
    blurb: "Have a project in mind or want to discuss AI solutions? I'd love to hear from you.",
};

pub const MAILTO: &str = "mailto:med.grich2002@gmail.com";

pub static CHANNELS: &[ContactChannel] = &[
    ContactChannel {
        kind: ContactChannelKind::Email,
        label: "Email",
        value: "med.grich2002@gmail.com",
        href: Some(MAILTO),
    },
    ContactChannel {
        kind: ContactChannelKind::Location,
        label: "Location",
        value: "Paris, France",
        href: None,
    },
    ContactChannel {
        kind: ContactChannelKind::Phone,
        label: "Phone",
        value: "+33 7 59 53 05 36",
        href: Some("tel:+33759530536"),
    },
];

pub static SOCIALS: &[SocialLink] = &[
    SocialLink {
        icon: Icon::Github,
        label: "GitHub",
        href: "https://github.com/jeroxgr",
    },
    SocialLink {
        icon: Icon::Linkedin,
        label: "LinkedIn",
        href: "https://linkedin.com/in/mohamed-grich",
    },
    SocialLink {
        icon: Icon::X,
        label: "X",
        href: "https://twitter.com/Jerox_GR",
    },
    SocialLink {
        icon: Icon::Mail,
        label: "Email",
        href: MAILTO,
    },
];
