// Criterion benchmarks for Volunteer Match

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use volunteer_match::core::{parse_instant, score_event, split_tags, Matcher, VolunteerIndex};
use volunteer_match::models::{Availability, Event, Volunteer};

const SKILLS: [&str; 8] = [
    "first-aid",
    "driving",
    "cooking",
    "welding",
    "teaching",
    "logistics",
    "translation",
    "carpentry",
];

fn create_volunteer() -> Volunteer {
    Volunteer {
        id: 1,
        full_name: "Bench Volunteer".to_string(),
        location: "Houston".to_string(),
        skills: vec![
            "first-aid".to_string(),
            "driving".to_string(),
            "logistics".to_string(),
        ],
        preferences: vec!["tag-A".to_string()],
        availability: Availability {
            start: parse_instant("2030-01-01"),
            end: parse_instant("2030-12-31"),
        },
    }
}

fn create_event(id: usize) -> Event {
    let location = if id % 3 == 0 { "Houston" } else { "Dallas" };
    let day = 1 + (id % 28);
    let month = 1 + (id % 12);
    let start = format!("2030-{:02}-{:02}", month, day);

    Event {
        id: id as i64,
        name: format!("Event {}", id),
        description: None,
        location: location.to_string(),
        urgency: None,
        required_skills: (0..(id % 4 + 1))
            .map(|k| SKILLS[(id + k) % SKILLS.len()].to_string())
            .collect(),
        start_time: parse_instant(&start),
        end_time: parse_instant(&start),
        preference_tag: if id % 2 == 0 { Some("tag-A".to_string()) } else { None },
    }
}

fn bench_score_event(c: &mut Criterion) {
    let volunteer = create_volunteer();
    let index = VolunteerIndex::new(&volunteer);
    let event = create_event(3);

    c.bench_function("score_event", |b| {
        b.iter(|| score_event(black_box(&index), black_box(&event)));
    });
}

fn bench_split_tags(c: &mut Criterion) {
    c.bench_function("split_tags", |b| {
        b.iter(|| split_tags(black_box("first-aid, driving,, cooking ,first-aid,logistics")));
    });
}

fn bench_ranking(c: &mut Criterion) {
    let matcher = Matcher::default();
    let volunteer = create_volunteer();

    let mut group = c.benchmark_group("ranking");

    for event_count in [10, 50, 100, 500, 1000].iter() {
        let events: Vec<Event> = (0..*event_count).map(create_event).collect();

        group.bench_with_input(
            BenchmarkId::new("rank", event_count),
            event_count,
            |b, _| {
                b.iter(|| matcher.rank(black_box(&volunteer), black_box(events.clone())));
            },
        );
    }

    group.finish();
}

fn bench_candidates(c: &mut Criterion) {
    let matcher = Matcher::default();
    let event = create_event(7);
    let volunteers: Vec<Volunteer> = (0..500)
        .map(|i| {
            let mut v = create_volunteer();
            v.id = i as i64;
            v.full_name = format!("Volunteer {:04}", i);
            v.skills = vec![
                SKILLS[i % SKILLS.len()].to_string(),
                SKILLS[(i * 3) % SKILLS.len()].to_string(),
            ];
            v
        })
        .collect();

    c.bench_function("rank_candidates_500_volunteers", |b| {
        b.iter(|| matcher.rank_candidates(black_box(&event), black_box(&volunteers)));
    });
}

criterion_group!(
    benches,
    bench_score_event,
    bench_split_tags,
    bench_ranking,
    bench_candidates
);

criterion_main!(benches);
