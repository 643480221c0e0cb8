use serde_json::{Map, Value};
use thiserror::Error;
use tracing::warn;
use webcraft_editor::BlockDocument;
use webcraft_model::{
    Block, BlockContent, BlockFamily, BlockStyles, BlockType, ColumnsContent, ContactFormContent,
    ContactInfoContent, FooterContent, GalleryContent, HeroContent, TextContent,
};

/// Errors that can occur during HTML compilation
#[derive(Error, Debug)]
pub enum CompileError {
    #[error("Block {block_id} ({block_type}) has content that does not fit its type")]
    ContentMismatch {
        block_id: String,
        block_type: BlockType,
    },

    #[error("Unknown block type: {0}")]
    UnknownBlockType(String),
}

/// Options for HTML compilation
#[derive(Debug, Clone)]
pub struct CompileOptions {
    /// Include inline styles
    pub inline_styles: bool,
    /// Pretty print HTML
    pub pretty: bool,
    /// Indentation string
    pub indent: String,
    /// Fail instead of rendering placeholders for unknown or damaged blocks
    pub strict: bool,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            inline_styles: true,
            pretty: true,
            indent: "  ".to_string(),
            strict: false,
        }
    }
}

struct Context {
    options: CompileOptions,
    depth: usize,
    buffer: String,
}

impl Context {
    fn new(options: CompileOptions) -> Self {
        Self {
            options,
            depth: 0,
            buffer: String::new(),
        }
    }

    fn add(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    fn add_line(&mut self, text: &str) {
        if self.options.pretty {
            for _ in 0..self.depth {
                self.buffer.push_str(&self.options.indent);
            }
        }
        self.add(text);
        if self.options.pretty {
            self.add("\n");
        }
    }

    /// `<tag attrs>escaped text</tag>` on one line
    fn add_text_element(&mut self, tag: &str, attrs: &str, text: &str) {
        self.add_line(&format!("<{}{}>{}</{}>", tag, attrs, escape_html(text), tag));
    }

    fn open(&mut self, tag: &str, attrs: &str) {
        self.add_line(&format!("<{}{}>", tag, attrs));
        self.depth += 1;
    }

    fn close(&mut self, tag: &str) {
        self.depth = self.depth.saturating_sub(1);
        self.add_line(&format!("</{}>", tag));
    }

    fn get_output(self) -> String {
        self.buffer
    }
}

/// Compile a document to a standalone HTML page
pub fn compile_to_html(
    document: &BlockDocument,
    options: CompileOptions,
) -> Result<String, CompileError> {
    let mut ctx = Context::new(options);

    ctx.add_line("<!DOCTYPE html>");
    ctx.open("html", " lang=\"en\"");

    ctx.open("head", "");
    ctx.add_line("<meta charset=\"UTF-8\">");
    ctx.add_line("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">");
    ctx.add_text_element("title", "", &document.meta.name);
    ctx.close("head");

    let theme = escape_html(&document.meta.theme.theme);
    ctx.open("body", &format!(" class=\"webcraft-theme-{}\"", theme));
    for block in document.blocks() {
        compile_block_into(block, &mut ctx)?;
    }
    ctx.close("body");

    ctx.close("html");

    Ok(ctx.get_output())
}

/// Compile a single block to an HTML fragment
pub fn compile_block(block: &Block, options: CompileOptions) -> Result<String, CompileError> {
    let mut ctx = Context::new(options);
    compile_block_into(block, &mut ctx)?;
    Ok(ctx.get_output())
}

fn compile_block_into(block: &Block, ctx: &mut Context) -> Result<(), CompileError> {
    let family = block.block_type.family();

    let mut attrs = format!(
        " id=\"{}\" class=\"webcraft-block webcraft-{}\" data-block-type=\"{}\"",
        escape_html(block.id.as_str()),
        family.as_ref(),
        escape_html(block.block_type.as_str()),
    );
    if ctx.options.inline_styles {
        let style = inline_style(&block.styles);
        if !style.is_empty() {
            attrs.push_str(&format!(" style=\"{}\"", escape_html(&style)));
        }
    }

    ctx.open("section", &attrs);
    match (family, &block.content) {
        (BlockFamily::Hero, BlockContent::Hero(hero)) => compile_hero(hero, ctx),
        (BlockFamily::Content, BlockContent::Text(text)) => compile_text(text, ctx),
        (BlockFamily::Content, BlockContent::Columns(columns)) => compile_columns(columns, ctx),
        (BlockFamily::Gallery, BlockContent::Gallery(gallery)) => {
            compile_gallery(&block.block_type, gallery, ctx)
        }
        (BlockFamily::Contact, BlockContent::ContactForm(form)) => compile_contact_form(form, ctx),
        (BlockFamily::Contact, BlockContent::ContactInfo(info)) => compile_contact_info(info, ctx),
        (BlockFamily::Footer, BlockContent::Footer(footer)) => compile_footer(footer, ctx),
        (BlockFamily::Custom, BlockContent::Unknown(fields)) => compile_freeform(fields, ctx),
        (BlockFamily::Unknown, _) => {
            if ctx.options.strict {
                return Err(CompileError::UnknownBlockType(
                    block.block_type.as_str().to_string(),
                ));
            }
            ctx.add_text_element(
                "div",
                " class=\"webcraft-unknown\"",
                &format!("Unknown block type: {}", block.block_type),
            );
        }
        (_, content) => {
            if ctx.options.strict {
                return Err(CompileError::ContentMismatch {
                    block_id: block.id.to_string(),
                    block_type: block.block_type.clone(),
                });
            }
            warn!(block = %block.id, block_type = %block.block_type, "content does not fit type");
            if let Value::Object(fields) = content.to_value() {
                compile_freeform(&fields, ctx);
            }
        }
    }
    ctx.close("section");

    Ok(())
}

fn compile_hero(hero: &HeroContent, ctx: &mut Context) {
    ctx.open("div", " class=\"hero-content\"");
    ctx.add_text_element("h1", "", &hero.title);
    ctx.add_text_element("p", " class=\"subtitle\"", &hero.subtitle);
    if !hero.button_text.is_empty() {
        let href = if hero.button_link.is_empty() {
            "#"
        } else {
            hero.button_link.as_str()
        };
        ctx.add_text_element(
            "a",
            &format!(" class=\"button\" href=\"{}\"", escape_html(href)),
            &hero.button_text,
        );
    }
    ctx.close("div");
}

fn compile_text(text: &TextContent, ctx: &mut Context) {
    ctx.open("div", " class=\"content-text\"");
    ctx.add_text_element("h2", "", &text.title);
    ctx.add_text_element("p", "", &text.text);
    ctx.close("div");
}

fn compile_columns(columns: &ColumnsContent, ctx: &mut Context) {
    ctx.open("div", " class=\"content-columns\"");
    for (title, text) in [
        (&columns.left_title, &columns.left_text),
        (&columns.right_title, &columns.right_text),
    ] {
        ctx.open("div", " class=\"column\"");
        ctx.add_text_element("h3", "", title);
        ctx.add_text_element("p", "", text);
        ctx.close("div");
    }
    ctx.close("div");
}

fn compile_gallery(block_type: &BlockType, gallery: &GalleryContent, ctx: &mut Context) {
    ctx.add_text_element("h2", "", &gallery.title);
    ctx.open(
        "div",
        &format!(" class=\"gallery {}\"", escape_html(block_type.as_str())),
    );
    for (index, image) in gallery.images.iter().enumerate() {
        ctx.add_line(&format!(
            "<img src=\"{}\" alt=\"Gallery image {}\" loading=\"lazy\" />",
            escape_html(image),
            index + 1
        ));
    }
    ctx.close("div");
}

fn compile_contact_form(form: &ContactFormContent, ctx: &mut Context) {
    ctx.add_text_element("h2", "", &form.title);
    ctx.add_text_element("p", " class=\"subtitle\"", &form.subtitle);

    ctx.open("form", " class=\"contact-form\"");
    for field in &form.fields {
        let name = escape_html(field);
        let label = capitalize(field);
        match field.as_str() {
            "message" => ctx.add_line(&format!(
                "<textarea name=\"{}\" placeholder=\"Your {}\" rows=\"4\"></textarea>",
                name,
                escape_html(&label)
            )),
            other => {
                let kind = if other == "email" { "email" } else { "text" };
                ctx.add_line(&format!(
                    "<input type=\"{}\" name=\"{}\" placeholder=\"Your {}\" />",
                    kind,
                    name,
                    escape_html(&label)
                ));
            }
        }
    }
    ctx.add_line("<button type=\"submit\">Send Message</button>");
    ctx.close("form");
}

fn compile_contact_info(info: &ContactInfoContent, ctx: &mut Context) {
    ctx.add_text_element("h2", "", &info.title);
    ctx.open("div", " class=\"contact-info\"");
    for (label, value) in [
        ("Email", &info.email),
        ("Phone", &info.phone),
        ("Address", &info.address),
    ] {
        ctx.open("div", "");
        ctx.add_text_element("h3", "", label);
        ctx.add_text_element("p", "", value);
        ctx.close("div");
    }
    ctx.close("div");
}

fn compile_footer(footer: &FooterContent, ctx: &mut Context) {
    ctx.open("div", " class=\"footer-content\"");
    ctx.add_text_element("p", "", &footer.text);
    if !footer.links.is_empty() {
        ctx.open("nav", "");
        for link in &footer.links {
            ctx.add_text_element(
                "a",
                &format!(" href=\"{}\"", escape_html(&link.url)),
                &link.text,
            );
        }
        ctx.close("nav");
    }
    ctx.close("div");
}

/// Blocks without a fixed layout: `title` becomes the heading, other string
/// fields become paragraphs and string lists become lists. Anything else is
/// skipped.
fn compile_freeform(fields: &Map<String, Value>, ctx: &mut Context) {
    ctx.open("div", " class=\"freeform\"");
    if let Some(Value::String(title)) = fields.get("title") {
        ctx.add_text_element("h2", "", title);
    }
    for (key, value) in fields {
        if key == "title" {
            continue;
        }
        let attrs = format!(" data-field=\"{}\"", escape_html(key));
        match value {
            Value::String(text) => ctx.add_text_element("p", &attrs, text),
            Value::Array(items) => {
                let items: Vec<&str> = items.iter().filter_map(Value::as_str).collect();
                if items.is_empty() {
                    continue;
                }
                ctx.open("ul", &attrs);
                for item in items {
                    ctx.add_text_element("li", "", item);
                }
                ctx.close("ul");
            }
            _ => {}
        }
    }
    ctx.close("div");
}

/// CSS declarations for the `style` attribute, unescaped
pub fn inline_style(styles: &BlockStyles) -> String {
    styles
        .css_declarations()
        .iter()
        .map(|(prop, value)| format!("{}: {};", prop, value))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
