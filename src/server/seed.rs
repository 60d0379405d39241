//! Idempotent demo data.
//!
//! Users are matched by email and games by title and platform; matches are updated in place
//! and everything else is inserted. Reviews are only added for (user, game) pairs that have
//! none. All writes share one transaction, so a failure leaves the database untouched.

use chrono::{NaiveDate, Utc};
use entity::user::UserRole;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DatabaseTransaction, DbErr,
    EntityTrait, QueryFilter, TransactionTrait, TryIntoModel,
};

use crate::server::{error::AppError, util::password::hash_password};

const SEED_PASSWORD: &str = "Password123!";

struct SeedUser {
    username: &'static str,
    email: &'static str,
}

struct SeedGame {
    title: &'static str,
    genre: &'static str,
    description: &'static str,
    developer: &'static str,
    release_date: (i32, u32, u32),
    publisher: &'static str,
    platform: &'static str,
    image_url: &'static str,
}

struct SeedReview {
    title: &'static str,
    content: &'static str,
    rating: i32,
    user_email: &'static str,
    game_title: &'static str,
}

const USERS: &[SeedUser] = &[
    SeedUser {
        username: "link",
        email: "link@hyrule.com",
    },
    SeedUser {
        username: "zelda",
        email: "zelda@hyrule.com",
    },
    SeedUser {
        username: "elden",
        email: "tarnished@lands.com",
    },
];

const GAMES: &[SeedGame] = &[
    SeedGame {
        title: "The Legend of Zelda: Breath of the Wild",
        genre: "Action-Adventure",
        description: "Open-world adventure in Hyrule.",
        developer: "Nintendo EPD",
        release_date: (2017, 3, 3),
        publisher: "Nintendo",
        platform: "Nintendo Switch",
        image_url: "https://upload.wikimedia.org/wikipedia/en/a/a2/Breath_of_the_Wild.jpg",
    },
    SeedGame {
        title: "Elden Ring",
        genre: "Action RPG",
        description: "Dark fantasy open-world action RPG.",
        developer: "FromSoftware",
        release_date: (2022, 2, 25),
        publisher: "Bandai Namco Entertainment",
        platform: "PC, PS4, PS5, Xbox One, Xbox Series X/S",
        image_url: "https://upload.wikimedia.org/wikipedia/en/b/b9/Elden_Ring_Box_art.jpg",
    },
    SeedGame {
        title: "Super Mario Odyssey",
        genre: "Platformer",
        description: "Mario globe-trotting with Cappy.",
        developer: "Nintendo EPD",
        release_date: (2017, 10, 27),
        publisher: "Nintendo",
        platform: "Nintendo Switch",
        image_url: "https://upload.wikimedia.org/wikipedia/en/8/8d/Super_Mario_Odyssey.jpg",
    },
];

const REVIEWS: &[SeedReview] = &[
    SeedReview {
        title: "Masterpiece",
        content: "Exploration is S-tier.",
        rating: 5,
        user_email: "link@hyrule.com",
        game_title: "The Legend of Zelda: Breath of the Wild",
    },
    SeedReview {
        title: "Hard but fair",
        content: "Boss fights are incredible.",
        rating: 5,
        user_email: "tarnished@lands.com",
        game_title: "Elden Ring",
    },
    SeedReview {
        title: "Joyful",
        content: "Movement is buttery smooth.",
        rating: 4,
        user_email: "zelda@hyrule.com",
        game_title: "Super Mario Odyssey",
    },
];

/// Rows written by one seed run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub users: usize,
    pub games: usize,
    pub reviews_created: usize,
}

/// Seeds users, games and reviews in a single transaction.
///
/// # Returns
/// - `Ok(SeedSummary)` - Counts of upserted users and games and newly created reviews
/// - `Err(AppError)` - Hashing or database error; nothing was committed
pub async fn seed(db: &DatabaseConnection) -> Result<SeedSummary, AppError> {
    let password_hash = hash_password(SEED_PASSWORD)?;

    let txn = db.begin().await?;

    let mut summary = SeedSummary::default();
    let mut users = Vec::with_capacity(USERS.len());
    let mut games = Vec::with_capacity(GAMES.len());

    for user in USERS {
        users.push(upsert_user(&txn, user, &password_hash).await?);
        summary.users += 1;
    }

    for game in GAMES {
        games.push(upsert_game(&txn, game).await?);
        summary.games += 1;
    }

    for review in REVIEWS {
        let user = users.iter().find(|u| u.email == review.user_email);
        let game = games.iter().find(|g| g.title == review.game_title);

        let (Some(user), Some(game)) = (user, game) else {
            tracing::warn!("Skipping review {:?}: user or game missing", review.title);
            continue;
        };

        if insert_review_if_absent(&txn, review, user.id, game.id).await? {
            summary.reviews_created += 1;
        }
    }

    txn.commit().await?;

    tracing::info!(
        "Seed complete: {} users, {} games, {} new reviews",
        summary.users,
        summary.games,
        summary.reviews_created
    );

    Ok(summary)
}

async fn upsert_user(
    txn: &DatabaseTransaction,
    user: &SeedUser,
    password_hash: &str,
) -> Result<entity::user::Model, DbErr> {
    let existing = entity::prelude::User::find()
        .filter(entity::user::Column::Email.eq(user.email))
        .one(txn)
        .await?;

    match existing {
        Some(existing) => {
            let mut active: entity::user::ActiveModel = existing.into();
            active.username = ActiveValue::Set(user.username.to_string());
            active.update(txn).await
        }
        None => {
            entity::user::ActiveModel {
                username: ActiveValue::Set(user.username.to_string()),
                email: ActiveValue::Set(user.email.to_string()),
                password: ActiveValue::Set(password_hash.to_string()),
                role: ActiveValue::Set(UserRole::User),
                created_at: ActiveValue::Set(Utc::now()),
                ..Default::default()
            }
            .insert(txn)
            .await
        }
    }
}

async fn upsert_game(
    txn: &DatabaseTransaction,
    game: &SeedGame,
) -> Result<entity::game::Model, DbErr> {
    use entity::game::Column;

    let (year, month, day) = game.release_date;
    let release_date = NaiveDate::from_ymd_opt(year, month, day);
    let now = Utc::now();

    let existing = entity::prelude::Game::find()
        .filter(Column::Title.eq(game.title))
        .filter(Column::Platform.eq(game.platform))
        .one(txn)
        .await?;

    let mut active = match existing {
        Some(existing) => existing.into(),
        None => entity::game::ActiveModel {
            title: ActiveValue::Set(game.title.to_string()),
            platform: ActiveValue::Set(Some(game.platform.to_string())),
            created_at: ActiveValue::Set(now),
            ..Default::default()
        },
    };

    active.genre = ActiveValue::Set(Some(game.genre.to_string()));
    active.description = ActiveValue::Set(Some(game.description.to_string()));
    active.developer = ActiveValue::Set(Some(game.developer.to_string()));
    active.release_date = ActiveValue::Set(release_date);
    active.publisher = ActiveValue::Set(Some(game.publisher.to_string()));
    active.image_url = ActiveValue::Set(Some(game.image_url.to_string()));
    active.updated_at = ActiveValue::Set(now);

    active.save(txn).await?.try_into_model()
}

async fn insert_review_if_absent(
    txn: &DatabaseTransaction,
    review: &SeedReview,
    user_id: i32,
    game_id: i32,
) -> Result<bool, DbErr> {
    use entity::review::Column;

    let existing = entity::prelude::Review::find()
        .filter(Column::UserId.eq(user_id))
        .filter(Column::GameId.eq(game_id))
        .one(txn)
        .await?;

    if existing.is_some() {
        return Ok(false);
    }

    let now = Utc::now();
    entity::review::ActiveModel {
        title: ActiveValue::Set(review.title.to_string()),
        content: ActiveValue::Set(review.content.to_string()),
        rating: ActiveValue::Set(review.rating),
        user_id: ActiveValue::Set(user_id),
        game_id: ActiveValue::Set(game_id),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    }
    .insert(txn)
    .await?;

    Ok(true)
}
