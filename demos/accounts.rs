//! Store account records keyed by email in a three-bucket table, look them
//! up, and tear the table down with a destructor.

use seeded_hashtable::{error_message, last_error, HashTable, InsertError};

#[derive(Debug)]
struct Account {
    number: u32,
    name: String,
    email: String,
}

impl Account {
    fn new(number: u32, name: &str, email: &str) -> Self {
        Self {
            number,
            name: name.to_string(),
            email: email.to_string(),
        }
    }
}

fn add_accounts(table: &mut HashTable<Account>) -> Result<(), InsertError<Account>> {
    let accounts = [
        Account::new(1, "John Smith", "jsmith@email.com"),
        Account::new(2, "Jane Doe", "jdoe@email.com"),
        Account::new(3, "Steven Stevenson", "sstevenson@email.com"),
    ];
    for acc in accounts {
        let email = acc.email.clone();
        table.insert(email.as_bytes(), acc)?;
    }
    Ok(())
}

fn main() {
    let mut table = match HashTable::new(3) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("accounts: create failed: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = add_accounts(&mut table) {
        eprintln!(
            "accounts: insert failed: {} ({})",
            e,
            error_message(last_error())
        );
        std::process::exit(1);
    }

    for email in ["jsmith@email.com", "jdoe@email.com", "sstevenson@email.com"] {
        if let Ok(acc) = table.get(email.as_bytes()) {
            println!("accounts: account number: {}", acc.number);
            println!("accounts: account name: {}", acc.name);
            println!("accounts: email: {}", acc.email);
        }
    }

    table.destroy(|acc| println!("accounts: closing account {}", acc.number));
}
