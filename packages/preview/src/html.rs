//! HTML rendering of a projected preview.

use crate::vdom::{PreviewDocument, VNode};

/// Options for HTML rendering
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Pretty print HTML
    pub pretty: bool,
    /// Indentation string
    pub indent: String,
    /// Title of the standalone page
    pub title: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            pretty: true,
            indent: "  ".to_string(),
            title: "Resume".to_string(),
        }
    }
}

impl RenderOptions {
    pub fn compact() -> Self {
        Self {
            pretty: false,
            ..Self::default()
        }
    }
}

struct Context<'a> {
    options: &'a RenderOptions,
    depth: usize,
    buffer: String,
}

impl<'a> Context<'a> {
    fn new(options: &'a RenderOptions) -> Self {
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
            self.add_indent();
        }
        self.add(text);
        self.newline();
    }

    fn newline(&mut self) {
        if self.options.pretty {
            self.add("\n");
        }
    }

    fn add_indent(&mut self) {
        for _ in 0..self.depth {
            self.buffer.push_str(&self.options.indent);
        }
    }

    fn indent(&mut self) {
        self.depth += 1;
    }

    fn dedent(&mut self) {
        if self.depth > 0 {
            self.depth -= 1;
        }
    }

    fn get_output(self) -> String {
        self.buffer
    }
}

/// Render the preview as a standalone HTML page
pub fn render_page(preview: &PreviewDocument, options: &RenderOptions) -> String {
    let mut ctx = Context::new(options);

    ctx.add_line("<!DOCTYPE html>");
    ctx.add_line("<html>");
    ctx.indent();

    ctx.add_line("<head>");
    ctx.indent();
    ctx.add_line("<meta charset=\"UTF-8\">");
    ctx.add_line(&format!("<title>{}</title>", escape_html(&options.title)));
    ctx.dedent();
    ctx.add_line("</head>");

    ctx.add_line("<body>");
    ctx.indent();
    render_node(&preview.to_vnode(), &mut ctx);
    ctx.dedent();
    ctx.add_line("</body>");

    ctx.dedent();
    ctx.add_line("</html>");

    ctx.get_output()
}

/// Render a single node (and its subtree) as an HTML fragment
pub fn render_fragment(node: &VNode, options: &RenderOptions) -> String {
    let mut ctx = Context::new(options);
    render_node(node, &mut ctx);
    ctx.get_output()
}

fn render_node(node: &VNode, ctx: &mut Context) {
    match node {
        VNode::Text { content } => {
            if ctx.options.pretty {
                ctx.add_indent();
            }
            ctx.add(&escape_html(content));
            ctx.newline();
        }
        VNode::Element {
            tag,
            attributes,
            children,
            ..
        } => {
            if ctx.options.pretty {
                ctx.add_indent();
            }
            ctx.add(&format!("<{}", tag));
            for (name, value) in attributes {
                ctx.add(&format!(" {}=\"{}\"", name, escape_html(value)));
            }

            if children.is_empty() && is_void(tag) {
                ctx.add(">");
                ctx.newline();
                return;
            }

            ctx.add(">");

            // Text-only children stay on the tag's line
            if children.iter().all(|child| matches!(child, VNode::Text { .. })) {
                for child in children {
                    if let VNode::Text { content } = child {
                        ctx.add(&escape_html(content));
                    }
                }
            } else {
                ctx.newline();
                ctx.indent();
                for child in children {
                    render_node(child, ctx);
                }
                ctx.dedent();
                if ctx.options.pretty {
                    ctx.add_indent();
                }
            }

            ctx.add(&format!("</{}>", tag));
            ctx.newline();
        }
    }
}

pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn is_void(tag: &str) -> bool {
    matches!(
        tag,
        "img" | "input" | "br" | "hr" | "meta" | "link" | "source" | "wbr"
    )
}
