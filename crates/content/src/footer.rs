use shared::domain::FooterContent;

pub const FOOTER: FooterContent = FooterContent {
    brand: "AI.dev",
    tagline: "Building the future with AI",
    signoff: "and lots of coffee",
    terminal_line: "> status: online | latency: 12ms",
};
