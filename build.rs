// build.rs

use clap::{Arg, Command};
use clap_mangen::Man;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Common argument: emit JSON
fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(clap::ArgAction::SetTrue)
        .help("Print JSON instead of text")
}

fn id_arg(help: &'static str) -> Arg {
    Arg::new("id").required(true).help(help)
}

fn field_arg(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name).long(name).value_name("VALUE").help(help)
}

fn recipe_command() -> Command {
    Command::new("recipe")
        .about("Recipe management")
        .subcommand(Command::new("list").about("List all recipes sorted by name").arg(json_arg()))
        .subcommand(
            Command::new("show")
                .about("Show a recipe with its ingredients")
                .arg(id_arg("Recipe id"))
                .arg(json_arg()),
        )
        .subcommand(
            Command::new("add")
                .about("Add a new recipe")
                .arg(field_arg("name", "Recipe name"))
                .arg(field_arg("time", "Preparation time (HH:MM:SS)"))
                .arg(field_arg("diners", "Number of diners the recipe serves"))
                .arg(field_arg("calories", "Calories per serving"))
                .arg(field_arg("preparation", "Preparation instructions")),
        )
        .subcommand(
            Command::new("edit")
                .about("Edit a recipe (unspecified fields keep their value)")
                .arg(id_arg("Recipe id"))
                .arg(field_arg("name", "Recipe name"))
                .arg(field_arg("time", "Preparation time (HH:MM:SS)"))
                .arg(field_arg("diners", "Number of diners the recipe serves"))
                .arg(field_arg("calories", "Calories per serving"))
                .arg(field_arg("preparation", "Preparation instructions")),
        )
        .subcommand(
            Command::new("remove")
                .about("Remove a recipe and its ingredient list")
                .arg(id_arg("Recipe id")),
        )
        .subcommand(
            Command::new("ingredients")
                .about("List the ingredients of a recipe")
                .arg(id_arg("Recipe id"))
                .arg(json_arg()),
        )
        .subcommand(
            Command::new("add-ingredient")
                .about("Add an ingredient to a recipe")
                .arg(Arg::new("recipe").required(true).help("Recipe id"))
                .arg(Arg::new("ingredient").required(true).help("Ingredient id"))
                .arg(Arg::new("quantity").required(true).help("Quantity in the ingredient's unit")),
        )
        .subcommand(
            Command::new("edit-ingredient")
                .about("Change the quantity of a recipe ingredient or swap the ingredient")
                .arg(Arg::new("recipe").required(true).help("Recipe id"))
                .arg(Arg::new("ingredient").required(true).help("Ingredient id currently on the recipe"))
                .arg(field_arg("replace-with", "Replace the ingredient with this one"))
                .arg(
                    Arg::new("quantity")
                        .short('q')
                        .long("quantity")
                        .required(true)
                        .help("New quantity"),
                ),
        )
        .subcommand(
            Command::new("remove-ingredient")
                .about("Remove an ingredient from a recipe")
                .arg(Arg::new("recipe").required(true).help("Recipe id"))
                .arg(Arg::new("ingredient").required(true).help("Ingredient id")),
        )
}

fn ingredient_command() -> Command {
    let fields = |cmd: Command| {
        cmd.arg(field_arg("name", "Ingredient name"))
            .arg(field_arg("unit", "Unit the price refers to"))
            .arg(field_arg("price", "Price per unit, e.g. 4000 or \"$4,000\""))
            .arg(field_arg("source", "Where the ingredient is bought"))
    };

    Command::new("ingredient")
        .about("Ingredient catalog management")
        .subcommand(
            Command::new("list")
                .about("List all ingredients sorted by name and unit")
                .arg(json_arg()),
        )
        .subcommand(
            Command::new("show")
                .about("Show one ingredient")
                .arg(id_arg("Ingredient id"))
                .arg(json_arg()),
        )
        .subcommand(fields(Command::new("add").about("Add a new ingredient")))
        .subcommand(fields(
            Command::new("edit")
                .about("Edit an ingredient (unspecified fields keep their value)")
                .arg(id_arg("Ingredient id")),
        ))
        .subcommand(
            Command::new("remove")
                .about("Remove an ingredient from the catalog and from every recipe")
                .arg(id_arg("Ingredient id")),
        )
}

fn build_cli() -> Command {
    Command::new("recetario")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A recipe book that scales preparations for any number of diners")
        .subcommand_required(false)
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .global(true)
                .help("Path to the configuration file"),
        )
        .arg(
            Arg::new("db_path")
                .short('d')
                .long("db-path")
                .value_name("PATH")
                .global(true)
                .help("Path to the database file (overrides the configuration)"),
        )
        .subcommand(Command::new("init").about("Initialize the recipe database"))
        .subcommand(recipe_command())
        .subcommand(ingredient_command())
        .subcommand(
            Command::new("prepare")
                .about("Show a recipe scaled for a number of diners")
                .allow_negative_numbers(true)
                .arg(Arg::new("recipe").required(true).help("Recipe id"))
                .arg(Arg::new("diners").required(true).help("Number of diners to cook for"))
                .arg(json_arg()),
        )
        .subcommand(
            Command::new("completions")
                .about("Generate shell completion scripts")
                .arg(
                    Arg::new("shell")
                        .required(true)
                        .value_parser(["bash", "elvish", "fish", "powershell", "zsh"])
                        .help("Shell type"),
                ),
        )
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    // Create man directory - use CARGO_MANIFEST_DIR which is always set by cargo
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(e) => {
            println!("cargo:warning=CARGO_MANIFEST_DIR not set: {}", e);
            return;
        }
    };
    let man_dir = manifest_dir.join("man");

    if let Err(e) = fs::create_dir_all(&man_dir) {
        println!("cargo:warning=Failed to create man directory: {}", e);
        return;
    }

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();

    if let Err(e) = man.render(&mut buffer) {
        println!("cargo:warning=Failed to render man page: {}", e);
        return;
    }

    let man_path = man_dir.join("recetario.1");
    if let Err(e) = fs::write(&man_path, buffer) {
        println!("cargo:warning=Failed to write man page: {}", e);
    }
}
