use crate::LearnApp;
use crate::code_utils::html_syntax;
use crate::model::ViewMode;
use crate::ui::helpers::{coming_soon_card, doc_links_list, tag_chip};
use crate::ui::layout::{
    code_editor_readonly, editor_preview_toggle, html_preview, mode_toggle, simple_panel,
};
use egui::{Button, Context, RichText};
use egui_commonmark::CommonMarkViewer;

const CODE_EXAMPLE: &str = r#"<!DOCTYPE html>
<html>
  <head>
    <title>HTML Elements Example</title>
  </head>
  <body>
    <h1>Welcome to HTML</h1>
    <p>This is a paragraph about HTML elements.</p>
    <p>Here's a <a href="https://example.com">link to Example.com</a>.</p>
    <h2>Images in HTML</h2>
    <p>Here's an example image:</p>
    <img src="example.jpg" alt="An example image">
  </body>
</html>"#;

enum LessonAction {
    Mode(ViewMode),
    Previous,
    Next,
    Jump(usize),
}

pub fn ui_lesson(app: &mut LearnApp, ctx: &Context) {
    let concept = app.navigator().active_concept().to_owned();
    let course_title = app
        .current_course()
        .map(|c| c.title.clone())
        .unwrap_or_else(|| "Course".into());
    let header = app.lesson_header();
    let lesson = app
        .current_lesson()
        .map(|l| (l.title.clone(), l.content.clone()));
    let links = app.store.doc_links(&concept).to_vec();

    let mut action = None;

    simple_panel(ctx, 1100.0, |ui| {
        ui.heading(&course_title);
        ui.horizontal(|ui| {
            tag_chip(ui, "HTML");
            tag_chip(ui, "Beginner");
        });
        ui.add_space(8.0);
        if let Some(mode) = mode_toggle(ui, ViewMode::Lesson, 360.0) {
            action = Some(LessonAction::Mode(mode));
        }
        ui.add_space(10.0);

        let (Some(header), Some((title, content))) = (header, lesson) else {
            coming_soon_card(
                ui,
                "Lessons Coming Soon",
                "Content for this module is not available yet.",
                None,
            );
            return;
        };

        // Navegación de lecciones
        ui.horizontal(|ui| {
            ui.label(RichText::new(header.label()).strong());
            if ui
                .add_enabled(header.has_previous, Button::new("←"))
                .clicked()
            {
                action = Some(LessonAction::Previous);
            }
            if ui.add_enabled(header.has_next, Button::new("→")).clicked() {
                action = Some(LessonAction::Next);
            }
        });
        ui.horizontal_wrapped(|ui| {
            for i in 0..header.total {
                let button = Button::new(format!("{}", i + 1)).selected(i == header.index);
                if ui.add(button).clicked() {
                    action = Some(LessonAction::Jump(i));
                }
            }
        });
        ui.add_space(10.0);

        ui.columns(2, |cols| {
            let left = &mut cols[0];
            left.heading(&title);
            left.add_space(6.0);
            CommonMarkViewer::new().show(left, &mut app.cm_cache, &content);
            left.add_space(12.0);

            if header.is_last() {
                if left
                    .button(RichText::new("Start Challenge 💻").strong())
                    .clicked()
                {
                    action = Some(LessonAction::Mode(ViewMode::Challenge));
                }
            } else if left.button("Next Lesson ▶").clicked() {
                action = Some(LessonAction::Next);
            }

            left.add_space(12.0);
            left.label(RichText::new("📄 Additional Resources").strong());
            doc_links_list(left, &links);

            let right = &mut cols[1];
            right.checkbox(&mut app.show_example, "Show HTML example");
            if app.show_example {
                editor_preview_toggle(right, &mut app.example_preview);
                if app.example_preview {
                    html_preview(right, &mut app.cm_cache, CODE_EXAMPLE, 360.0);
                } else {
                    let width = right.available_width();
                    code_editor_readonly(
                        right,
                        "lesson_example",
                        width,
                        16,
                        html_syntax(),
                        CODE_EXAMPLE,
                        360.0,
                    );
                }
            }
        });
    });

    match action {
        Some(LessonAction::Mode(mode)) => app.set_view_mode(mode),
        Some(LessonAction::Previous) => app.previous_lesson(),
        Some(LessonAction::Next) => app.next_lesson(),
        Some(LessonAction::Jump(i)) => app.set_active_lesson(i),
        None => {}
    }
}
