use shelfstock_catalog::{Book, Movie};
use shelfstock_inventory::{Media, MediaStore};

fn main() -> anyhow::Result<()> {
    shelfstock_observability::init();

    let mut store = MediaStore::new([
        Media::Book(Book::new("Author1", "Book1", 10.0, 5)),
        Media::Book(Book::new("Author2", "Book2", 15.0, 3)),
    ]);
    store.add_media(Movie::new("Movie1", "Director1", 20.0, 2));

    tracing::info!(items = store.len(), "stock loaded");

    println!("Total balance: {}", store.total_balance());
    println!("Total count: {}", store.count());
    println!("Total balance (Ex): {}", store.total_balance_ex());
    println!("Total count (Ex): {}", store.count_ex());

    println!("{}", serde_json::to_string_pretty(store.stock())?);

    Ok(())
}
