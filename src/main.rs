use std::cell::RefCell;
use std::fs::File;
use std::path::PathBuf;
use std::rc::Rc;

use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

use menukit::console::StdConsole;
use menukit::core::config::{self, ResolvedConfig, ShortcutStyle};
use menukit::core::{Binding, Flow, Item, List, Menu, MenuError, Navigable};
use menukit::render::{DefaultMenuRenderer, IndexListItemRenderer};

#[derive(Parser)]
#[command(name = "menukit", about = "Interactive hierarchical text menus")]
struct Args {
    /// Path to an alternate config file
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to menukit.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = File::create("menukit.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = match &args.config {
        Some(path) => config::load_config_from(path)?,
        None => config::load_config()?,
    };
    let resolved = config::resolve(&file_config);
    log::info!("menukit starting up");

    let people = Rc::new(RefCell::new(vec![
        "Ginette".to_string(),
        "Marcel".to_string(),
        "Gisèle".to_string(),
    ]));

    let mut list = people_list(&people, &resolved)?;
    let mut console = StdConsole::new();
    let outcome = list.run(&mut console)?;
    log::info!("menukit finished: {outcome:?}");
    Ok(())
}

/// The outer list: one row per person, each opening a show/delete sub-menu.
/// Deleting someone shrinks the list the next time it is displayed.
fn people_list(
    people: &Rc<RefCell<Vec<String>>>,
    resolved: &ResolvedConfig,
) -> Result<List<String>, MenuError> {
    let model_source = Rc::clone(people);
    let submenu_source = Rc::clone(people);
    let mut list = List::new(
        "Select someone",
        move || Some(model_source.borrow().clone()),
        Binding::navigable(move |person: &String| {
            Ok(Box::new(person_menu(person, &submenu_source)?) as Box<dyn Navigable>)
        }),
    );
    list.set_auto_back(false);
    list.set_renderer(Box::new(DefaultMenuRenderer::with_prompt(
        resolved.prompt.clone(),
    )))?;
    if resolved.shortcut_style == ShortcutStyle::Index {
        list.set_item_renderer(Box::new(IndexListItemRenderer))?;
    }
    list.register_quit_labeled("q", resolved.quit_label.clone())?;
    Ok(list)
}

/// Sub-menu for one person: show the name, or delete it from the collection.
fn person_menu(person: &str, people: &Rc<RefCell<Vec<String>>>) -> Result<Menu, MenuError> {
    let mut menu = Menu::new(person);
    menu.set_auto_back(true);

    let shown = person.to_string();
    menu.add(Item::action("show", "s", move |console| {
        console.print_line(&format!("This is {shown}."));
        Flow::Continue
    }))?;

    let deleted = person.to_string();
    let collection = Rc::clone(people);
    menu.add(Item::action("delete", "d", move |console| {
        collection.borrow_mut().retain(|p| p != &deleted);
        console.print_line(&format!("{deleted} has been deleted."));
        Flow::Continue
    }))?;

    Ok(menu)
}
