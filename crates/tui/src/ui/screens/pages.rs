use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use crate::{
    app::AppState,
    ui::{components::card::Card, theme::Theme},
};

struct Section {
    title: &'static str,
    body: &'static [&'static str],
}

const HELP: &[Section] = &[
    Section {
        title: "Top questions",
        body: &[
            "How do I reset my PIN? Go to Settings → Security → Reset PIN.",
            "How do I block my card? Open Cards (F5), select the card and press b, or call +234 800 SKYBANK.",
            "How long do transfers take? Same-bank: instant. Inter-bank: up to 24 hours.",
        ],
    },
    Section {
        title: "Need more help?",
        body: &[
            "Contact Customer Care:",
            "Phone: +234 800 SKYBANK",
            "Email: support@skybank.com",
        ],
    },
    Section {
        title: "Resources",
        body: &["Privacy Policy (F10)", "Card Services (F5)", "Customer Care (F8)"],
    },
];

const PRIVACY: &[Section] = &[
    Section {
        title: "1. Information We Collect",
        body: &[
            "Personal details: name, phone number, email address, date of birth.",
            "Financial information: account numbers, card details, transaction records.",
            "Device information: IP address, device ID, browser type, app version.",
            "Location data: approximate or precise location when required for security.",
            "Usage data: features you use, time spent, clicks, and interaction logs.",
            "Verification data: BVN, NIN, identity documents, facial or biometric scans (if provided).",
        ],
    },
    Section {
        title: "2. How We Use Your Information",
        body: &[
            "To create and manage your SkyBank account.",
            "To process transactions, transfers, and card payments.",
            "To verify your identity and prevent fraud.",
            "To provide customer support and resolve complaints.",
            "To improve app performance and banking features.",
            "To comply with financial regulations and legal obligations.",
        ],
    },
    Section {
        title: "3. How We Share Your Information",
        body: &[
            "We do not sell your personal data. We may only share your information with:",
            "Regulatory bodies: when required by law (e.g., CBN, EFCC, NDIC).",
            "Payment processors: to complete money transfers or card transactions.",
            "Service providers: identity verification partners, security vendors, cloud storage.",
            "Law enforcement: only when legally necessary.",
        ],
    },
    Section {
        title: "4. How We Protect Your Data",
        body: &[
            "End-to-end encryption for sensitive data.",
            "Secure cloud infrastructure and firewalls.",
            "Multi-factor authentication and biometric verification.",
            "Continuous monitoring for fraud or suspicious transactions.",
            "Regular security audits and compliance checks.",
        ],
    },
    Section {
        title: "5. Your Rights",
        body: &[
            "Request access to the personal data we store.",
            "Request correction of inaccurate information.",
            "Request deletion of your data (where legally possible).",
            "Withdraw consent for optional data collection.",
            "Opt-out of marketing or notifications.",
        ],
    },
    Section {
        title: "6. Data Retention",
        body: &[
            "We keep your data for as long as your SkyBank account remains active. Some financial data may be retained longer to comply with legal and regulatory requirements.",
        ],
    },
    Section {
        title: "7. Cookies & Tracking",
        body: &[
            "We use cookies and analytics tools to improve performance and personalize your experience.",
        ],
    },
    Section {
        title: "8. Third-Party Links",
        body: &[
            "SkyBank may contain links to external services. Review their policies before sharing personal information.",
        ],
    },
    Section {
        title: "9. Updates to This Policy",
        body: &[
            "We may update this Privacy Policy occasionally and will notify you through email or in-app alerts.",
        ],
    },
    Section {
        title: "10. Contact Us",
        body: &[
            "Email: privacy@skybank.com",
            "Customer Care: +234 800 SKYBANK",
            "Address: SkyBank Headquarters, Lagos, Nigeria",
        ],
    },
];

pub fn render_help(frame: &mut Frame<'_>, area: Rect, state: &AppState) {
    render_page(frame, area, "Help", HELP, state.page_scroll);
}

pub fn render_privacy(frame: &mut Frame<'_>, area: Rect, state: &AppState) {
    render_page(frame, area, "Privacy Policy", PRIVACY, state.page_scroll);
}

fn render_page(frame: &mut Frame<'_>, area: Rect, title: &str, sections: &[Section], scroll: u16) {
    let theme = Theme::default();
    let mut lines = Vec::new();
    for section in sections {
        lines.push(Line::from(Span::styled(
            section.title,
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )));
        for item in section.body {
            lines.push(Line::from(vec![
                Span::styled("  • ", Style::default().fg(theme.text_muted)),
                Span::styled(*item, Style::default().fg(theme.text)),
            ]));
        }
        lines.push(Line::default());
    }

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    Card::new(title, &theme).render_with(frame, area, paragraph);
}
