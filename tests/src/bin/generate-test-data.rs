//! Emits a JSON feed fixture on stdout, shaped like the server's responses.
//! Useful for seeding a development server or eyeballing the rendering of
//! mentions, reactions and deeply nested comment threads.

use chrono::{Duration, TimeZone, Utc};
use kudos_api::{
    Attachment, AttachmentId, Comment, CommentId, Department, DepartmentId, Reaction, ReactionId,
    ReactionKind, Shoutout, ShoutoutId, Time, User, UserId,
};
use rand::{seq::SliceRandom, Rng};

const NUM_USERS: usize = 12;
const NUM_SHOUTOUTS: usize = 30;
const MAX_RECIPIENTS: usize = 3;
const MAX_REACTIONS: usize = 8;
const MAX_COMMENTS: usize = 10;
const CONTENT_WORD_COUNT: usize = 18;
const COMMENT_WORD_COUNT: usize = 9;

const FIRST_NAMES: &[&str] = &[
    "Alice", "Bruno", "Carmen", "Dmitri", "Elena", "Farid", "Grace", "Hiro", "Ingrid", "Jonas",
    "Keiko", "Lucas",
];
const LAST_NAMES: &[&str] = &[
    "Andersson", "Baptiste", "Chen", "Duarte", "Eriksen", "Fujimoto", "Garcia", "Hale", "Iqbal",
    "Johnson", "Kovacs", "Lindqvist",
];
const DEPARTMENTS: &[&str] = &["Engineering", "Design", "Sales", "Support"];

fn gen_time(rng: &mut impl Rng) -> Time {
    let base = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    base + Duration::seconds(rng.gen_range(0..365 * 24 * 3600))
}

fn gen_users(rng: &mut impl Rng) -> Vec<User> {
    let departments = DEPARTMENTS
        .iter()
        .enumerate()
        .map(|(i, name)| Department {
            id: DepartmentId(i as i64 + 1),
            name: name.to_string(),
            created_at: gen_time(rng),
        })
        .collect::<Vec<_>>();
    (0..NUM_USERS)
        .map(|i| {
            let full_name = format!("{} {}", FIRST_NAMES[i], LAST_NAMES[i]);
            User {
                id: UserId(i as i64 + 1),
                email: format!(
                    "{}.{}@example.com",
                    FIRST_NAMES[i].to_lowercase(),
                    LAST_NAMES[i].to_lowercase()
                ),
                full_name,
                is_admin: i == 0,
                avatar_url: None,
                department: departments.choose(rng).cloned(),
                created_at: gen_time(rng),
            }
        })
        .collect()
}

/// Text with a chance of a `@Full Name` mention spliced in, so the rendering
/// side has something to highlight
fn gen_content(rng: &mut impl Rng, words: usize, users: &[User]) -> String {
    let mut text = lipsum::lipsum_words_with_rng(&mut *rng, words);
    if rng.gen_bool(0.7) {
        let user = users.choose(rng).unwrap();
        text.push_str(&format!(" @{} ", user.full_name));
        text.push_str(&lipsum::lipsum_words_with_rng(&mut *rng, 3));
    }
    text
}

fn gen_comments(rng: &mut impl Rng, users: &[User], next_id: &mut i64) -> Vec<Comment> {
    let mut comments: Vec<Comment> = Vec::new();
    for _ in 0..rng.gen_range(0..=MAX_COMMENTS) {
        // Reply to an existing comment about half the time, so threads get
        // arbitrarily deep
        let parent_id = comments
            .choose(rng)
            .filter(|_| rng.gen_bool(0.5))
            .map(|c| c.id);
        comments.push(Comment {
            id: CommentId(*next_id),
            content: gen_content(rng, COMMENT_WORD_COUNT, users),
            created_at: gen_time(rng),
            user: users.choose(rng).unwrap().clone(),
            parent_id,
        });
        *next_id += 1;
    }
    comments
}

fn gen_reactions(rng: &mut impl Rng, users: &[User], next_id: &mut i64) -> Vec<Reaction> {
    // One reaction per user at most, like the server enforces
    let mut reactors = users.to_vec();
    reactors.shuffle(rng);
    reactors
        .into_iter()
        .take(rng.gen_range(0..=MAX_REACTIONS))
        .map(|user| {
            let reaction = Reaction {
                id: ReactionId(*next_id),
                kind: *[ReactionKind::Like, ReactionKind::Clap, ReactionKind::Star]
                    .choose(rng)
                    .unwrap(),
                user,
                created_at: gen_time(rng),
            };
            *next_id += 1;
            reaction
        })
        .collect()
}

fn main() {
    let mut rng = rand::thread_rng();
    let users = gen_users(&mut rng);

    let mut next_comment_id = 1;
    let mut next_reaction_id = 1;
    let mut shoutouts: Vec<Shoutout> = (0..NUM_SHOUTOUTS)
        .map(|i| {
            let created_by = users.choose(&mut rng).unwrap().clone();
            let mut recipients = users
                .iter()
                .filter(|u| u.id != created_by.id)
                .cloned()
                .collect::<Vec<_>>();
            recipients.shuffle(&mut rng);
            recipients.truncate(rng.gen_range(1..=MAX_RECIPIENTS));
            let attachments = rng
                .gen_bool(0.2)
                .then(|| {
                    vec![Attachment {
                        id: AttachmentId(i as i64 + 1),
                        file_url: format!("https://files.example.com/{}.png", i),
                        file_name: format!("celebration-{}.png", i),
                        file_type: String::from("image/png"),
                        created_at: gen_time(&mut rng),
                    }]
                })
                .unwrap_or_default();
            Shoutout {
                id: ShoutoutId(i as i64 + 1),
                content: gen_content(&mut rng, CONTENT_WORD_COUNT, &users),
                created_at: gen_time(&mut rng),
                created_by,
                recipients,
                reactions: gen_reactions(&mut rng, &users, &mut next_reaction_id),
                comments: gen_comments(&mut rng, &users, &mut next_comment_id),
                attachments,
            }
        })
        .collect();
    // The feed endpoint serves newest first
    shoutouts.sort_by_key(|s| std::cmp::Reverse(s.created_at));

    let fixture = serde_json::json!({
        "users": users,
        "shoutouts": shoutouts,
    });
    println!(
        "{}",
        serde_json::to_string_pretty(&fixture).expect("serializing the fixture")
    );
}
