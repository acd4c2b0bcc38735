use std::env;

use classroom_oop::bank::{Account, open_account};
use classroom_oop::csv::{read_operations, write_balances};
use classroom_oop::{AccountKind, Amount, Bank};
use tokio_stream::wrappers::ReceiverStream;
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("warn".parse().unwrap()))
        .with_writer(std::io::stderr)
        .init();

    match env::args().nth(1) {
        Some(path) => run_operations(path).await,
        None => demo(),
    }
}

/// Stream operations from a csv file through the bank and print final balances.
async fn run_operations(path: String) {
    if !path.ends_with(".csv") {
        warn!(path, "input file seems to not be a csv file");
    }

    let operations = match read_operations(path) {
        Ok(operations) => operations,
        Err(e) => {
            warn!("{e}");
            return;
        }
    };

    let mut bank = Bank::new();
    let (op_sender, op_receiver) = tokio::sync::mpsc::channel(16);

    tokio::spawn(async move {
        for result in operations {
            match result {
                Ok(op) => {
                    if op_sender.send(op).await.is_err() {
                        break;
                    }
                }
                Err(e) => {
                    warn!("{e}");
                }
            }
        }
    });

    bank.run(ReceiverStream::new(op_receiver)).await;

    let mut accounts: Vec<&dyn Account> = bank.accounts().collect();
    accounts.sort_by(|a, b| a.owner().cmp(b.owner()));
    if let Err(e) = write_balances(accounts) {
        warn!("failed to write balances: {e}");
    }
}

/// Fixed walkthrough: one savings and one current account, same transactions.
fn demo() {
    let openings = [
        (AccountKind::Savings, "Arman", Amount::from_taka(100_000)),
        (AccountKind::Current, "Rahim", Amount::from_taka(200_000)),
    ];

    let mut accounts = Vec::new();
    for (kind, owner, balance) in openings {
        match open_account(kind, owner, balance) {
            Ok(account) => accounts.push(account),
            Err(e) => warn!(owner, "{e}"),
        }
    }

    for account in &mut accounts {
        println!("\nOwner: {}", account.owner());
        println!("This is a {}.", account.account_type());

        let deposit = Amount::from_taka(10_000);
        match account.deposit(deposit) {
            Ok(balance) => println!("{deposit} Tk deposited. New balance: {balance} Tk"),
            Err(e) => println!("{e}"),
        }

        let withdrawal = Amount::from_taka(60_000);
        match account.withdraw(withdrawal) {
            Ok(balance) => println!("{withdrawal} Tk withdrawn. New balance: {balance} Tk"),
            Err(e) => println!("{e}"),
        }

        println!("Final balance: {} Tk", account.balance());
    }
}
