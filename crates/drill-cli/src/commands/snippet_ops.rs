//! Maintenance of the on-disk snippet store.

use std::fs;
use std::path::Path;
use std::process;

use serde::Serialize;

use drill_core::snippets::{NewSnippet, Snippet, SnippetStore};

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

fn open_store(store_file: &str) -> SnippetStore {
    die!(
        SnippetStore::load(Path::new(store_file)),
        "Failed to open store {store_file}: {}"
    )
}

fn save_store(store: &SnippetStore, store_file: &str) {
    die!(
        store.save(Path::new(store_file)),
        "Failed to write store {store_file}: {}"
    );
}

#[derive(Debug, Serialize)]
struct Listing<'a> {
    snippets: &'a [Snippet],
    folders: &'a [drill_core::snippets::Folder],
}

pub fn list(store_file: &str, json: bool) {
    let store = open_store(store_file);
    if json {
        let listing = Listing {
            snippets: store.snippets(),
            folders: store.folders(),
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&listing).expect("JSON serialization failed")
        );
        return;
    }

    for folder in store.folders() {
        println!("{} [{}]", folder.name, folder.id);
        for snippet in store.snippets_in(Some(&folder.id)) {
            println!("  {} ({}) [{}]", snippet.name, snippet.language, snippet.id);
        }
    }
    for snippet in store.snippets_in(None) {
        println!("{} ({}) [{}]", snippet.name, snippet.language, snippet.id);
    }
    eprintln!(
        "{} snippets, {} folders",
        store.snippets().len(),
        store.folders().len()
    );
}

pub fn add(
    store_file: &str,
    name: &str,
    language: &str,
    code_file: &str,
    folder_id: Option<String>,
) {
    let code = die!(
        fs::read_to_string(code_file),
        "Failed to read code file {code_file}: {}"
    );
    let mut store = open_store(store_file);
    let id = store
        .add_snippet(NewSnippet {
            name: name.to_string(),
            language: language.to_string(),
            code,
            folder_id,
        })
        .id
        .clone();
    save_store(&store, store_file);
    println!("Added snippet {id}");
}

pub fn remove(store_file: &str, id: &str) {
    let mut store = open_store(store_file);
    if !store.delete_snippet(id) {
        eprintln!("No snippet with id {id}");
        process::exit(1);
    }
    save_store(&store, store_file);
    println!("Removed snippet {id}");
}
