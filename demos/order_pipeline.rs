//! Order Pipeline
//!
//! This example walks an order through validation, payment and shipping.
//!
//! Key concepts:
//! - States decide their own successor from the cargo they receive
//! - Anonymous states run but are never reported to observers
//! - Observers receive every named transition
//!
//! Run with: cargo run --example order_pipeline

use statewalk::builder::StateMachineBuilder;
use statewalk::core::{FnObserver, FnState, HistoryRecorder, ObserverRef, StateRef, Step};
use std::sync::Arc;

struct Order {
    id: u64,
    amount_cents: u64,
    paid: bool,
    notes: Vec<String>,
}

fn main() {
    println!("=== Order Pipeline Example ===\n");

    let shipped: StateRef<Order> = Arc::new(FnState::named("Shipped", |mut order: Order| {
        order.notes.push("handed to carrier".to_string());
        println!("  paid: {}, notes: {:?}", order.paid, order.notes);
        Ok(Step::done(order))
    }));

    let rejected: StateRef<Order> = Arc::new(FnState::named("Rejected", |mut order: Order| {
        order.notes.push("order rejected".to_string());
        Ok(Step::done(order))
    }));

    // Bookkeeping step: runs, but observers never hear about it.
    let to_shipped = Arc::clone(&shipped);
    let ledger: StateRef<Order> = Arc::new(FnState::new(move |mut order: Order| {
        order.notes.push(format!("ledger entry for {} cents", order.amount_cents));
        Ok(Step::to(Arc::clone(&to_shipped), order))
    }));

    let to_ledger = Arc::clone(&ledger);
    let payment: StateRef<Order> = Arc::new(FnState::named("Payment", move |mut order: Order| {
        if order.amount_cents > 100_000 {
            return Err(format!("order {} exceeds the payment limit", order.id).into());
        }
        order.paid = true;
        Ok(Step::to(Arc::clone(&to_ledger), order))
    }));

    let (to_payment, to_rejected) = (Arc::clone(&payment), Arc::clone(&rejected));
    let validate: StateRef<Order> = Arc::new(FnState::named("Validate", move |order: Order| {
        let next = if order.amount_cents == 0 {
            &to_rejected
        } else {
            &to_payment
        };
        Ok(Step::to(Arc::clone(next), order))
    }));

    let recorder = Arc::new(HistoryRecorder::new());
    let printer: ObserverRef = Arc::new(FnObserver::new(|prior, next| {
        if prior.is_empty() {
            println!("  -> {next}");
        } else {
            println!("  {prior} -> {next}");
        }
    }));

    let machine = StateMachineBuilder::new()
        .states([
            Arc::clone(&validate),
            Arc::clone(&payment),
            Arc::clone(&ledger),
            Arc::clone(&shipped),
            Arc::clone(&rejected),
        ])
        .observer(recorder.clone() as ObserverRef)
        .observer(printer)
        .build();

    for (id, amount_cents) in [(1, 4_999), (2, 0), (3, 250_000)] {
        println!("Order {id}:");
        let order = Order {
            id,
            amount_cents,
            paid: false,
            notes: Vec::new(),
        };

        match machine.run(order, &validate) {
            Ok(()) => println!("  finished"),
            Err(err) => println!("  failed: {err}"),
        }

        let log = recorder.take();
        println!("  entered: {:?}\n", log.entered());
    }

    println!("=== Example Complete ===");
}
