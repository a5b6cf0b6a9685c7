//! TabShell: a minimal multi-tab desktop web browser shell.
//!
//! Entry point: opens the browser window.
//! When built without the `gui` feature, walks through a scripted session
//! against in-memory views instead.

#[cfg(feature = "gui")]
fn main() {
    tabshell::logging::init();
    if let Err(e) = tabshell::ui::webview_app::run() {
        tracing::error!(error = %e, "failed to start");
        std::process::exit(1);
    }
}

#[cfg(not(feature = "gui"))]
fn main() {
    use tabshell::app::{App, ViewCommand};
    use tabshell::ipc_handler::{self, ChromeCommand};
    use tabshell::managers::tab_manager::TabManagerTrait;
    use tabshell::types::settings::GeneralSettings;
    use tabshell::views::headless::{HeadlessFactory, HeadlessView};

    tabshell::logging::init();

    let mut app: App<HeadlessView> = App::new(&GeneralSettings::default());
    let mut factory = HeadlessFactory::new();
    app.render(&mut factory);

    let first = app.tab_manager.active_tab_id().to_string();
    println!("Started with 1 tab: {}", app.tab_manager.get_active_tab().url);

    let script = [
        ChromeCommand::NewTab,
        ChromeCommand::EditAddress {
            text: "weather".to_string(),
        },
        ChromeCommand::Submit,
    ];
    for command in script {
        if let Err(e) = ipc_handler::apply(&mut app, command) {
            eprintln!("command failed: {}", e);
        }
        app.render(&mut factory);
    }
    let second = app.tab_manager.active_tab_id().to_string();
    println!(
        "Tab 2 navigated to: {}",
        app.tab_manager.get_active_tab().url
    );

    let notification = app
        .views()
        .get(&second)
        .and_then(|view| view.emit_title("weather - Search"));
    if let Some((tab_id, title)) = notification {
        app.on_title_changed(&tab_id, &title);
    }
    println!("Tab 2 title: {}", app.tab_manager.get_active_tab().title);

    app.navigate_view(ViewCommand::Back);
    if let Some(view) = app.views().get(&second) {
        println!("Tab 2 view went back to: {}", view.current_url());
    }

    if let Err(e) = app.close_tab(&second) {
        eprintln!("close failed: {}", e);
    }
    app.render(&mut factory);

    let active = app.tab_manager.get_active_tab();
    println!(
        "Closed tab 2: {} tab(s) left, active is tab 1 = {}, address bar = {}",
        app.tab_manager.tab_count(),
        active.id == first,
        app.tab_manager.address_bar_text()
    );
    println!("Views created: {}, alive: {}", factory.created(), app.views().len());
}
