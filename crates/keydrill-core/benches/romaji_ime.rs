use std::sync::Arc;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use keydrill_core::event::InputEvent;
use keydrill_core::language::{Keyboard, Language};
use keydrill_core::lesson::{GuidedLesson, KeyStatsMap};
use keydrill_core::phonetic::TransitionModel;
use keydrill_core::romaji::{RomajiIme, RomajiTrie};
use keydrill_core::settings::LessonSettings;
use rand::rngs::SmallRng;
use rand::SeedableRng;

static INPUTS: &[(&str, &str)] = &[
    ("short", "kyou"),
    ("medium", "kyouhaiitenkidesune"),
    ("long", "watashihakyouhaiitenkidatoomoimasu shukudaiwoyattekara ganbarimasu"),
    ("geminate", "kitto zutto chotto matte kudasai"),
];

fn events(romaji: &str) -> Vec<InputEvent> {
    romaji
        .chars()
        .enumerate()
        .map(|(i, c)| InputEvent::append_char(c, 120.0, i as f64 * 120.0))
        .collect()
}

fn bench_ime(c: &mut Criterion) {
    // build the shared table outside the measurement
    RomajiTrie::global();
    let mut group = c.benchmark_group("romaji_ime/consume");
    for &(label, romaji) in INPUTS {
        let input = events(romaji);
        group.bench_with_input(BenchmarkId::new(label, romaji.len()), &input, |b, input| {
            b.iter(|| {
                let mut ime = RomajiIme::new();
                let mut committed = 0;
                for &event in input {
                    committed += ime.consume(event).events.len();
                }
                committed
            });
        });
    }
    group.finish();
}

fn bench_lookup(c: &mut Criterion) {
    let trie = RomajiTrie::global();
    let mut group = c.benchmark_group("romaji_ime/trie");
    for &(label, romaji) in INPUTS {
        group.bench_with_input(BenchmarkId::new(label, romaji.len()), &romaji, |b, &romaji| {
            b.iter(|| {
                let mut rest = romaji;
                while !rest.is_empty() {
                    let step = trie.find_best_match(rest).map_or(1, |m| m.len);
                    rest = &rest[step..];
                }
            });
        });
    }
    group.finish();
}

fn bench_generate(c: &mut Criterion) {
    let words = [
        "the", "then", "than", "that", "this", "tent", "test", "state", "seat", "neat", "note",
        "tone", "stone", "notes", "nest", "ease", "east", "teeth", "tenth", "sent", "ant",
        "hate", "heat", "hose", "shoe", "toast", "onset", "stain", "saint", "satin",
    ];
    let model = Arc::new(TransitionModel::train(Language::english(), words));
    let mut settings = LessonSettings::default();
    settings.guided.natural_words = false;
    let keyboard = Keyboard::uniform("en-us", 'a'..='z');
    let lesson = GuidedLesson::new(settings, keyboard, model, Vec::<String>::new());
    let keys = lesson.update(&KeyStatsMap::new());
    let mut rng = SmallRng::seed_from_u64(42);

    c.bench_function("lesson/generate", |b| {
        b.iter(|| lesson.generate(&keys, &mut rng));
    });
}

criterion_group!(benches, bench_ime, bench_lookup, bench_generate);
criterion_main!(benches);
