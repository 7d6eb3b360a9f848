/// Retardo antes de la respuesta simulada, en segundos
pub const REPLY_DELAY: f64 = 0.8;

const GREETING: &str = "Hi there! I'm your AI coding assistant. How can I help you with your web development journey today?";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

#[derive(Clone, Debug)]
struct PendingReply {
    due_at: f64,
    content: String,
}

/// Chat del asistente. Las respuestas pendientes van ligadas a la ventana:
/// al cerrarla se cancelan.
#[derive(Clone, Debug)]
pub struct AssistantChat {
    pub open: bool,
    pub draft: String,
    transcript: Vec<ChatMessage>,
    pending: Vec<PendingReply>,
}

impl Default for AssistantChat {
    fn default() -> Self {
        Self {
            open: false,
            draft: String::new(),
            transcript: vec![ChatMessage {
                role: Role::Assistant,
                content: GREETING.into(),
            }],
            pending: Vec::new(),
        }
    }
}

impl AssistantChat {
    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    pub fn toggle(&mut self) {
        if self.open {
            self.close();
        } else {
            self.open = true;
        }
    }

    pub fn close(&mut self) {
        self.open = false;
        if !self.pending.is_empty() {
            log::debug!("asistente cerrado, {} respuestas canceladas", self.pending.len());
        }
        self.pending.clear();
    }

    /// Envía el borrador; devuelve false si estaba vacío.
    pub fn send(&mut self, now: f64) -> bool {
        let message = self.draft.trim().to_owned();
        if message.is_empty() {
            return false;
        }
        self.draft.clear();
        self.pending.push(PendingReply {
            due_at: now + REPLY_DELAY,
            content: generate_reply(&message).to_owned(),
        });
        self.transcript.push(ChatMessage {
            role: Role::User,
            content: message,
        });
        true
    }

    /// Añade al historial las respuestas cuyo plazo ha vencido.
    pub fn poll(&mut self, now: f64) -> usize {
        let (due, waiting): (Vec<_>, Vec<_>) =
            self.pending.drain(..).partition(|p| p.due_at <= now);
        self.pending = waiting;
        let count = due.len();
        self.transcript
            .extend(due.into_iter().map(|p| ChatMessage {
                role: Role::Assistant,
                content: p.content,
            }));
        count
    }

    /// Segundos hasta la próxima respuesta, si hay alguna pendiente
    pub fn next_due_in(&self, now: f64) -> Option<f64> {
        self.pending
            .iter()
            .map(|p| (p.due_at - now).max(0.0))
            .reduce(f64::min)
    }
}

pub fn generate_reply(message: &str) -> &'static str {
    let msg = message.to_lowercase();
    let has = |words: &[&str]| words.iter().any(|w| msg.contains(w));

    if has(&["html"]) {
        "HTML is the standard markup language for creating web pages. It uses elements with opening and closing tags to structure content. For example, <p>This is a paragraph</p> creates a paragraph of text."
    } else if has(&["image", "img"]) {
        "To add an image in HTML, use the <img> tag with the src attribute pointing to your image file and alt attribute for accessibility: <img src=\"image.jpg\" alt=\"Description\">"
    } else if has(&["link", "href"]) {
        "To create a link in HTML, use the <a> tag with the href attribute: <a href=\"https://example.com\">Visit Example</a>"
    } else if has(&["stuck", "help"]) {
        "I see you might be stuck. For HTML structure, remember that every HTML document should have <!DOCTYPE html>, <html>, <head>, and <body> tags. The content visible to users goes inside the <body> tag."
    } else if has(&["css"]) {
        "CSS (Cascading Style Sheets) is used to style and format HTML content. It controls things like colors, fonts, spacing, and layout. You can add CSS to HTML using inline styles, internal stylesheets, or external stylesheets."
    } else if has(&["javascript", "js"]) {
        "JavaScript is a programming language that adds interactivity to web pages. You can use it to respond to user actions, modify HTML content dynamically, validate forms, create animations, and much more."
    } else if has(&["element", "tag"]) {
        "HTML elements are the building blocks of web pages. They are represented by tags like <p> for paragraphs, <h1> to <h6> for headings, <a> for links, <img> for images, etc. Most elements have an opening tag, content, and a closing tag: <tagname>Content</tagname>."
    } else {
        "I'm here to help with your web development learning! Do you have a specific question about HTML elements, attributes, or structure? Or would you like an example of a particular concept?"
    }
}
