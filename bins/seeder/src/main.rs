//! Database seeder for Rano development and testing.
//!
//! Seeds the committee board (treasurer, secretary general, president) and a
//! month of sample financial events so a statement can be drafted and signed
//! locally without manual data entry.
//!
//! Usage: cargo run --bin seeder

use chrono::{Datelike, Duration, NaiveDate, Utc};
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use std::str::FromStr;
use uuid::Uuid;

use rano_db::entities::{donations, employees, expenses, invoice_payments, salary_payments};

/// Board member IDs (consistent for all seeds).
const TREASURER_ID: &str = "00000000-0000-0000-0000-000000000001";
const SECRETARY_ID: &str = "00000000-0000-0000-0000-000000000002";
const PRESIDENT_ID: &str = "00000000-0000-0000-0000-000000000003";

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let database_url =
        std::env::var("DATABASE_URL").expect("DATABASE_URL must be set in environment");

    println!("Connecting to database...");
    let db = rano_db::connect(&database_url)
        .await
        .expect("Failed to connect to database");

    println!("Seeding committee board...");
    seed_board(&db).await;

    println!("Seeding invoice payments...");
    seed_invoice_payments(&db).await;

    println!("Seeding donations...");
    seed_donations(&db).await;

    println!("Seeding expenses...");
    seed_expenses(&db).await;

    println!("Seeding salary payments...");
    seed_salary_payments(&db).await;

    println!("Seeding complete!");
}

fn board_ids() -> [(Uuid, &'static str, &'static str); 3] {
    [
        (
            Uuid::parse_str(TREASURER_ID).unwrap(),
            "Hery Rakotomalala",
            "Treasurer",
        ),
        (
            Uuid::parse_str(SECRETARY_ID).unwrap(),
            "Voahangy Rasolofo",
            "Secretary General",
        ),
        (
            Uuid::parse_str(PRESIDENT_ID).unwrap(),
            "Jean-Baptiste Andrianarivo",
            "President",
        ),
    ]
}

/// First day of the previous month, the natural period to reconcile.
fn period_start() -> NaiveDate {
    let today = Utc::now().date_naive();
    let first_of_month = today.with_day(1).unwrap();
    let last_month_end = first_of_month - Duration::days(1);
    last_month_end.with_day(1).unwrap()
}

/// Seeds the three board members who sign statements.
async fn seed_board(db: &DatabaseConnection) {
    for (id, full_name, position) in board_ids() {
        if employees::Entity::find_by_id(id)
            .one(db)
            .await
            .ok()
            .flatten()
            .is_some()
        {
            println!("  {position} already exists, skipping...");
            continue;
        }

        let employee = employees::ActiveModel {
            id: Set(id),
            full_name: Set(full_name.to_string()),
            position: Set(position.to_string()),
            is_active: Set(true),
            created_at: Set(Utc::now().into()),
            updated_at: Set(Utc::now().into()),
        };

        if let Err(e) = employee.insert(db).await {
            eprintln!("Failed to insert {position}: {e}");
        } else {
            println!("  Created {position}: {full_name}");
        }
    }
}

/// Seeds a month of water invoice payments.
async fn seed_invoice_payments(db: &DatabaseConnection) {
    let existing = invoice_payments::Entity::find()
        .filter(invoice_payments::Column::EntryDate.gte(period_start()))
        .one(db)
        .await
        .ok()
        .flatten();
    if existing.is_some() {
        println!("  Invoice payments already seeded, skipping...");
        return;
    }

    let payments = [
        ("FACT-0101", "Famille Razafindrakoto", "12000.00", 2),
        ("FACT-0102", "Famille Rabe", "8500.00", 5),
        ("FACT-0103", "Epicerie Soa", "21000.00", 9),
        ("FACT-0104", "Famille Andriamihaja", "9500.00", 14),
        ("FACT-0105", "Ecole Primaire", "35000.00", 20),
        ("FACT-0106", "Famille Ramanantsoa", "14000.00", 25),
    ];

    for (invoice_number, payer_name, amount, day_offset) in payments {
        let payment = invoice_payments::ActiveModel {
            id: Set(Uuid::now_v7()),
            invoice_number: Set(invoice_number.to_string()),
            payer_name: Set(payer_name.to_string()),
            amount: Set(Decimal::from_str(amount).unwrap()),
            entry_date: Set(period_start() + Duration::days(day_offset)),
            created_at: Set(Utc::now().into()),
        };

        if let Err(e) = payment.insert(db).await {
            eprintln!("Failed to insert invoice payment {invoice_number}: {e}");
        }
    }
    println!("  Created {} invoice payments", payments.len());
}

/// Seeds a couple of donations.
async fn seed_donations(db: &DatabaseConnection) {
    let existing = donations::Entity::find()
        .filter(donations::Column::EntryDate.gte(period_start()))
        .one(db)
        .await
        .ok()
        .flatten();
    if existing.is_some() {
        println!("  Donations already seeded, skipping...");
        return;
    }

    let entries = [
        ("Association des Ressortissants", "50000.00", 7),
        ("Donateur anonyme", "10000.00", 18),
    ];

    for (donor_name, amount, day_offset) in entries {
        let donation = donations::ActiveModel {
            id: Set(Uuid::now_v7()),
            donor_name: Set(donor_name.to_string()),
            amount: Set(Decimal::from_str(amount).unwrap()),
            entry_date: Set(period_start() + Duration::days(day_offset)),
            created_at: Set(Utc::now().into()),
        };

        if let Err(e) = donation.insert(db).await {
            eprintln!("Failed to insert donation from {donor_name}: {e}");
        }
    }
    println!("  Created {} donations", entries.len());
}

/// Seeds maintenance expenses.
async fn seed_expenses(db: &DatabaseConnection) {
    let existing = expenses::Entity::find()
        .filter(expenses::Column::EntryDate.gte(period_start()))
        .one(db)
        .await
        .ok()
        .flatten();
    if existing.is_some() {
        println!("  Expenses already seeded, skipping...");
        return;
    }

    let entries = [
        ("Remplacement vanne borne-fontaine 3", "18000.00", 4),
        ("Chlore et produits de traitement", "12500.00", 11),
        ("Transport pieces detachees", "6000.00", 22),
    ];

    for (label, amount, day_offset) in entries {
        let expense = expenses::ActiveModel {
            id: Set(Uuid::now_v7()),
            label: Set(label.to_string()),
            amount: Set(Decimal::from_str(amount).unwrap()),
            entry_date: Set(period_start() + Duration::days(day_offset)),
            created_at: Set(Utc::now().into()),
        };

        if let Err(e) = expense.insert(db).await {
            eprintln!("Failed to insert expense {label}: {e}");
        }
    }
    println!("  Created {} expenses", entries.len());
}

/// Seeds the fontainier's monthly salary.
async fn seed_salary_payments(db: &DatabaseConnection) {
    let existing = salary_payments::Entity::find()
        .filter(salary_payments::Column::EntryDate.gte(period_start()))
        .one(db)
        .await
        .ok()
        .flatten();
    if existing.is_some() {
        println!("  Salary payments already seeded, skipping...");
        return;
    }

    let salary = salary_payments::ActiveModel {
        id: Set(Uuid::now_v7()),
        employee_id: Set(None),
        amount: Set(Decimal::from_str("40000.00").unwrap()),
        entry_date: Set(period_start() + Duration::days(27)),
        created_at: Set(Utc::now().into()),
    };

    if let Err(e) = salary.insert(db).await {
        eprintln!("Failed to insert salary payment: {e}");
    } else {
        println!("  Created 1 salary payment");
    }
}
