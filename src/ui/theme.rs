use fltk::{
    enums::Color,
    frame::Frame,
    menu::MenuBar,
    prelude::*,
    text::{TextDisplay, TextEditor},
    window::Window,
};

/// Re-color every chrome widget for the requested theme. Buffer content is
/// untouched; the editor's style table is rebuilt separately so explicit
/// color tags keep their values.
pub fn apply_theme(
    editor: &mut TextEditor,
    window: &mut Window,
    menu: &mut MenuBar,
    log_panel: &mut TextDisplay,
    status_label: &mut Frame,
    is_dark: bool,
) {
    if is_dark {
        editor.set_color(Color::from_rgb(30, 30, 30));
        editor.set_text_color(Color::from_rgb(220, 220, 220));
        editor.set_cursor_color(Color::from_rgb(255, 255, 255));
        editor.set_selection_color(Color::from_rgb(70, 70, 100));
        window.set_color(Color::from_rgb(25, 25, 25));
        window.set_label_color(Color::from_rgb(220, 220, 220));
        menu.set_color(Color::from_rgb(35, 35, 35));
        menu.set_text_color(Color::from_rgb(220, 220, 220));
        menu.set_selection_color(Color::from_rgb(60, 60, 60)); // Hover color
        log_panel.set_color(Color::from_rgb(37, 37, 37));
        log_panel.set_text_color(Color::from_rgb(180, 180, 180));
        status_label.set_color(Color::from_rgb(35, 35, 35));
        status_label.set_label_color(Color::from_rgb(200, 200, 200));
    } else {
        editor.set_color(Color::White);
        editor.set_text_color(Color::Black);
        editor.set_cursor_color(Color::Black);
        editor.set_selection_color(Color::from_rgb(173, 216, 230));
        window.set_color(Color::from_rgb(240, 240, 240));
        window.set_label_color(Color::Black);
        menu.set_color(Color::from_rgb(240, 240, 240));
        menu.set_text_color(Color::Black);
        menu.set_selection_color(Color::from_rgb(200, 200, 200)); // Hover color
        log_panel.set_color(Color::from_rgb(245, 245, 245));
        log_panel.set_text_color(Color::from_rgb(60, 60, 60));
        status_label.set_color(Color::from_rgb(224, 224, 224));
        status_label.set_label_color(Color::Black);
    }

    editor.redraw();
    window.redraw();
    menu.redraw();
    log_panel.redraw();
    status_label.redraw();
}
