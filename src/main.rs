use std::io::{self, BufRead, Write};

use tracing_subscriber::EnvFilter;

use biblio::{JsonFileStore, Library, LibraryError};

const MENU: &str = "\
--- LIBRARY MENU ---
1. Add book
2. Generate random books
3. Register member
4. Request loan
5. Process next loan
6. Return book
7. List books
8. Search book by title
9. Return history
10. Recommendations for a member
11. Graph statistics
12. Quit";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let data_dir = std::env::var("BIBLIO_DATA").unwrap_or_else(|_| "biblio-data".to_string());
    let store = JsonFileStore::open(&data_dir)?;
    let mut library = Library::open(store)?;

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        println!("\n{}", MENU);
        let Some(choice) = prompt(&mut lines, "Choose an option: ")? else {
            break;
        };

        let result = match choice.as_str() {
            "1" => add_book(&mut library, &mut lines),
            "2" => generate_books(&mut library, &mut lines),
            "3" => register_member(&mut library, &mut lines),
            "4" => request_loan(&mut library, &mut lines),
            "5" => process_loan(&mut library),
            "6" => return_book(&mut library, &mut lines),
            "7" => {
                list_books(&library);
                Ok(())
            }
            "8" => search_by_title(&library, &mut lines),
            "9" => {
                show_history(&library);
                Ok(())
            }
            "10" => show_recommendations(&library, &mut lines),
            "11" => {
                show_statistics(&library);
                Ok(())
            }
            "12" => break,
            _ => {
                println!("Invalid option");
                Ok(())
            }
        };

        if let Err(err) = result {
            println!("{}", err);
        }
    }

    println!("Goodbye!");
    Ok(())
}

type Lines = io::Lines<io::StdinLock<'static>>;

fn prompt(lines: &mut Lines, label: &str) -> io::Result<Option<String>> {
    print!("{}", label);
    io::stdout().flush()?;
    match lines.next() {
        Some(line) => Ok(Some(line?.trim().to_string())),
        None => Ok(None),
    }
}

fn prompt_u64(lines: &mut Lines, label: &str) -> io::Result<Option<u64>> {
    loop {
        let Some(raw) = prompt(lines, label)? else {
            return Ok(None);
        };
        match raw.parse() {
            Ok(value) => return Ok(Some(value)),
            Err(_) => println!("Expected a number, got {:?}", raw),
        }
    }
}

fn add_book(
    library: &mut Library<JsonFileStore>,
    lines: &mut Lines,
) -> Result<(), Box<dyn std::error::Error>> {
    let Some(title) = prompt(lines, "Title: ")? else {
        return Ok(());
    };
    let Some(author) = prompt(lines, "Author: ")? else {
        return Ok(());
    };
    let id = library.add_book(title.clone(), author)?;
    println!("Book added: {} (id {})", title, id);
    Ok(())
}

fn generate_books(
    library: &mut Library<JsonFileStore>,
    lines: &mut Lines,
) -> Result<(), Box<dyn std::error::Error>> {
    let Some(count) = prompt_u64(lines, "How many books? ")? else {
        return Ok(());
    };
    let ids = library.generate_books(count as usize, &mut rand::thread_rng())?;
    println!("{} books generated and added to the catalog", ids.len());
    Ok(())
}

fn register_member(
    library: &mut Library<JsonFileStore>,
    lines: &mut Lines,
) -> Result<(), Box<dyn std::error::Error>> {
    let Some(name) = prompt(lines, "Member name: ")? else {
        return Ok(());
    };
    let id = library.register_member(name.clone())?;
    println!("Member registered: {} (id {})", name, id);
    Ok(())
}

fn request_loan(
    library: &mut Library<JsonFileStore>,
    lines: &mut Lines,
) -> Result<(), Box<dyn std::error::Error>> {
    let Some(member_id) = prompt_u64(lines, "Member id: ")? else {
        return Ok(());
    };
    let Some(book_id) = prompt_u64(lines, "Book id: ")? else {
        return Ok(());
    };
    library.request_loan(member_id, book_id)?;
    println!("Loan request queued");
    Ok(())
}

fn process_loan(library: &mut Library<JsonFileStore>) -> Result<(), Box<dyn std::error::Error>> {
    match library.process_next_loan() {
        Ok(receipt) => {
            println!("Loan granted: {} to {}", receipt.title, receipt.member_name);
            Ok(())
        }
        Err(LibraryError::NoPendingRequests) => {
            println!("No pending loan requests");
            Ok(())
        }
        Err(err @ LibraryError::Persistence(_)) => Err(err.into()),
        Err(err) => {
            println!("Request discarded: {}", err);
            Ok(())
        }
    }
}

fn return_book(
    library: &mut Library<JsonFileStore>,
    lines: &mut Lines,
) -> Result<(), Box<dyn std::error::Error>> {
    let Some(member_id) = prompt_u64(lines, "Member id: ")? else {
        return Ok(());
    };
    let Some(title) = prompt(lines, "Title to return: ")? else {
        return Ok(());
    };
    library.return_book(member_id, &title)?;
    println!("Book returned: {}", title);
    Ok(())
}

fn list_books(library: &Library<JsonFileStore>) {
    let books = library.books();
    if books.is_empty() {
        println!("No books registered");
        return;
    }
    for book in books {
        let status = if book.available { "Available" } else { "On loan" };
        println!(
            "id {} | {} | {} | {}",
            book.id, book.title, book.author, status
        );
    }
}

fn search_by_title(
    library: &Library<JsonFileStore>,
    lines: &mut Lines,
) -> Result<(), Box<dyn std::error::Error>> {
    let Some(title) = prompt(lines, "Title to search: ")? else {
        return Ok(());
    };
    match library.book_by_title(&title) {
        Some(book) => {
            let status = if book.available { "Available" } else { "On loan" };
            println!(
                "Found: id {} | {} | {} | {}",
                book.id, book.title, book.author, status
            );
        }
        None => println!("Book not found"),
    }
    Ok(())
}

fn show_history(library: &Library<JsonFileStore>) {
    let history = library.return_history();
    if history.is_empty() {
        println!("No returns recorded");
        return;
    }
    println!("Return history (most recent first):");
    for title in history {
        println!("- {}", title);
    }
}

fn show_recommendations(
    library: &Library<JsonFileStore>,
    lines: &mut Lines,
) -> Result<(), Box<dyn std::error::Error>> {
    let Some(member_id) = prompt_u64(lines, "Member id: ")? else {
        return Ok(());
    };
    let recommendations = library.recommendations_for(member_id, 3);
    if recommendations.is_empty() {
        println!("No recommendations available for this member");
        return Ok(());
    }
    println!("Recommendations for member {}:", member_id);
    for (book_id, score) in recommendations {
        match library.book(book_id) {
            Some(book) => println!("- {} by {} (score {})", book.title, book.author, score),
            None => println!("- book id {} (score {})", book_id, score),
        }
    }
    Ok(())
}

fn show_statistics(library: &Library<JsonFileStore>) {
    let stats = library.statistics();
    println!("Members in graph: {}", stats.members);
    println!("Books in graph: {}", stats.books);
    println!("Interactions: {}", stats.interactions);
    if !stats.top_books.is_empty() {
        println!("Most borrowed books:");
        for (book_id, weight) in stats.top_books {
            match library.book(book_id) {
                Some(book) => println!("- {} ({} loans)", book.title, weight),
                None => println!("- book id {} ({} loans)", book_id, weight),
            }
        }
    }
}
