//! Benchmarks for the field reducers and the form aggregate.
//!
//! These measure a keystroke's worth of reducer work on short and long
//! field values, and the aggregate check run when the debounce fires.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use login_tui::form::{aggregate_validity, reduce, FieldAction, FieldKind, FieldState};

fn bench_user_input(c: &mut Criterion) {
    let state = FieldState::default();
    c.bench_function("reduce_email_user_input", |b| {
        b.iter(|| {
            reduce(
                FieldKind::Email,
                black_box(&state),
                FieldAction::UserInput {
                    value: black_box("someone@example.com").to_string(),
                },
            )
        })
    });
}

fn bench_blur_long_password(c: &mut Criterion) {
    let state = FieldState {
        value: format!("  {}  ", "x".repeat(1024)),
        is_valid: None,
    };
    c.bench_function("reduce_password_blur_1k", |b| {
        b.iter(|| reduce(FieldKind::Password, black_box(&state), FieldAction::Blur))
    });
}

fn bench_aggregate_validity(c: &mut Criterion) {
    let email = reduce(
        FieldKind::Email,
        &FieldState::default(),
        FieldAction::UserInput {
            value: "someone@example.com".to_string(),
        },
    );
    let password = reduce(
        FieldKind::Password,
        &FieldState::default(),
        FieldAction::UserInput {
            value: "secret1".to_string(),
        },
    );
    c.bench_function("aggregate_validity_two_fields", |b| {
        b.iter(|| aggregate_validity(black_box(&[&email, &password])))
    });
}

criterion_group!(
    benches,
    bench_user_input,
    bench_blur_long_password,
    bench_aggregate_validity
);
criterion_main!(benches);
