//! Built-in block templates shown in the sidebar library.

use std::sync::OnceLock;

use crate::content::{
    BlockContent, ColumnsContent, ContactFormContent, ContactInfoContent, FooterContent,
    GalleryContent, HeroContent, Link, TextContent,
};
use crate::ids::TemplateId;
use crate::styles::{BlockStyles, TextAlign};
use crate::template::{BlockTemplate, TemplateCategory};

/// The static catalog, in display order
pub fn builtin_templates() -> &'static [BlockTemplate] {
    static CATALOG: OnceLock<Vec<BlockTemplate>> = OnceLock::new();
    CATALOG.get_or_init(build_catalog)
}

/// Look up a built-in template by id
pub fn builtin_template(id: &str) -> Option<&'static BlockTemplate> {
    builtin_templates().iter().find(|t| t.id.as_str() == id)
}

fn s(v: &str) -> Option<String> {
    Some(v.to_string())
}

fn section(bg: &str, color: &str, padding: &str, align: TextAlign) -> BlockStyles {
    BlockStyles {
        background_color: s(bg),
        text_color: s(color),
        padding: s(padding),
        text_align: Some(align),
        ..Default::default()
    }
}

fn hero_styles(bg: &str, color: &str, padding: &str, min_height: &str) -> BlockStyles {
    BlockStyles {
        min_height: s(min_height),
        display: s("flex"),
        align_items: s("center"),
        justify_content: s("center"),
        ..section(bg, color, padding, TextAlign::Center)
    }
}

fn template(
    id: &str,
    name: &str,
    icon: &str,
    category: TemplateCategory,
    preview: &str,
    content: BlockContent,
    styles: BlockStyles,
) -> BlockTemplate {
    BlockTemplate {
        id: TemplateId::from(id),
        name: name.to_string(),
        icon: icon.to_string(),
        category,
        preview: preview.to_string(),
        content,
        styles,
    }
}

fn hero(title: &str, subtitle: &str, button_text: &str) -> BlockContent {
    BlockContent::Hero(HeroContent {
        title: title.to_string(),
        subtitle: subtitle.to_string(),
        button_text: button_text.to_string(),
        button_link: "#".to_string(),
        ..Default::default()
    })
}

fn build_catalog() -> Vec<BlockTemplate> {
    use TemplateCategory::*;

    vec![
        template(
            "hero-modern",
            "Modern Hero",
            "🚀",
            Hero,
            "Clean hero with gradient background",
            hero(
                "Build Amazing Websites",
                "Create beautiful, fast-loading websites without the complexity",
                "Get Started",
            ),
            hero_styles(
                "linear-gradient(135deg, #667eea 0%, #764ba2 100%)",
                "#ffffff",
                "120px 40px",
                "600px",
            ),
        ),
        template(
            "hero-classic",
            "Classic Hero",
            "🎯",
            Hero,
            "Traditional hero with image background",
            hero(
                "Your Success Story Starts Here",
                "Professional solutions for modern businesses",
                "Learn More",
            ),
            hero_styles("#1a202c", "#ffffff", "100px 40px", "500px"),
        ),
        template(
            "hero-minimal",
            "Minimal Hero",
            "✨",
            Hero,
            "Simple and clean hero section",
            hero(
                "Simple. Elegant. Effective.",
                "Minimalist design that focuses on what matters",
                "Explore",
            ),
            hero_styles("#f8fafc", "#2d3748", "80px 40px", "400px"),
        ),
        template(
            "content-text",
            "Text Content",
            "📝",
            Content,
            "Rich text content section",
            BlockContent::Text(TextContent {
                title: "About Our Company".to_string(),
                text: "We are passionate about creating exceptional digital experiences that \
                       help businesses grow and succeed in the modern world. Our team combines \
                       creativity with technical expertise to deliver solutions that make a \
                       real impact."
                    .to_string(),
                ..Default::default()
            }),
            section("#ffffff", "#4a5568", "60px 40px", TextAlign::Left),
        ),
        template(
            "content-columns",
            "Two Columns",
            "📊",
            Content,
            "Side-by-side content layout",
            BlockContent::Columns(ColumnsContent {
                left_title: "Our Mission".to_string(),
                left_text: "To empower businesses with cutting-edge technology solutions."
                    .to_string(),
                right_title: "Our Vision".to_string(),
                right_text: "A world where technology seamlessly enhances human potential."
                    .to_string(),
                ..Default::default()
            }),
            section("#f7fafc", "#2d3748", "60px 40px", TextAlign::Left),
        ),
        template(
            "gallery-grid",
            "Image Grid",
            "🖼️",
            Gallery,
            "Grid layout for images",
            BlockContent::Gallery(GalleryContent {
                title: "Our Work".to_string(),
                images: [
                    "https://images.unsplash.com/photo-1460925895917-afdab827c52f?w=400",
                    "https://images.unsplash.com/photo-1498050108023-c5249f4df085?w=400",
                    "https://images.unsplash.com/photo-1486312338219-ce68d2c6f44d?w=400",
                    "https://images.unsplash.com/photo-1581091226825-a6a2a5aee158?w=400",
                ]
                .iter()
                .map(|url| url.to_string())
                .collect(),
                ..Default::default()
            }),
            section("#ffffff", "#2d3748", "60px 40px", TextAlign::Center),
        ),
        template(
            "contact-form",
            "Contact Form",
            "📧",
            Contact,
            "Contact form with fields",
            BlockContent::ContactForm(ContactFormContent {
                title: "Get In Touch".to_string(),
                subtitle: "We'd love to hear from you. Send us a message and we'll respond as \
                           soon as possible."
                    .to_string(),
                fields: vec!["name".to_string(), "email".to_string(), "message".to_string()],
                ..Default::default()
            }),
            section("#f8fafc", "#2d3748", "80px 40px", TextAlign::Center),
        ),
        template(
            "contact-info",
            "Contact Info",
            "📍",
            Contact,
            "Contact information display",
            BlockContent::ContactInfo(ContactInfoContent {
                title: "Contact Information".to_string(),
                email: "hello@company.com".to_string(),
                phone: "+1 (555) 123-4567".to_string(),
                address: "123 Business St, City, State 12345".to_string(),
                ..Default::default()
            }),
            section("#2d3748", "#ffffff", "60px 40px", TextAlign::Center),
        ),
        template(
            "footer-simple",
            "Simple Footer",
            "📋",
            Footer,
            "Clean footer with basic info",
            BlockContent::Footer(FooterContent {
                text: "© 2024 Your Company. All rights reserved.".to_string(),
                links: vec![
                    Link {
                        text: "Privacy Policy".to_string(),
                        url: "#".to_string(),
                    },
                    Link {
                        text: "Terms of Service".to_string(),
                        url: "#".to_string(),
                    },
                ],
                ..Default::default()
            }),
            section("#1a202c", "#a0aec0", "40px", TextAlign::Center),
        ),
    ]
}
