use chrono::{TimeZone, Utc};

use crate::post::{Author, ContentLine, Post};

/// The fixed seed feed.
///
/// Built once at startup and never mutated. Timestamps are the São Paulo
/// wall-clock publish times expressed as UTC instants.
pub fn seed_posts() -> Vec<Post> {
    vec![
        Post {
            id: Some(1),
            author: Author {
                name: "Diego Fernandes".to_string(),
                avatar_url: "https://github.com/diego3g.png".to_string(),
                role: "CTO @Rocketseat".to_string(),
            },
            content: vec![
                ContentLine::Paragraph("Fala galera 👋".to_string()),
                ContentLine::Paragraph(
                    "Acabei de subir mais um projeto no meu portifa. É um projeto que fiz \
                     no NLW Return, evento da Rocketseat. O nome do projeto é DoctorCare 🚀"
                        .to_string(),
                ),
                ContentLine::Link("jane.design/doctorcare".to_string()),
            ],
            published_at: Utc.with_ymd_and_hms(2022, 5, 3, 23, 0, 0).unwrap(),
        },
        Post {
            id: Some(2),
            author: Author {
                name: "Mayk Brito".to_string(),
                avatar_url: "https://github.com/maykbrito.png".to_string(),
                role: "Educator @Rocketseat".to_string(),
            },
            content: vec![
                ContentLine::Paragraph("Fala galera 👋".to_string()),
                ContentLine::Paragraph(
                    "Acabei de subir mais um projeto no meu portifa. É um projeto que fiz \
                     no NLW Return, evento da Rocketseat. O nome do projeto é DoctorCare 🚀"
                        .to_string(),
                ),
                ContentLine::Link("jane.design/doctorcare".to_string()),
            ],
            published_at: Utc.with_ymd_and_hms(2022, 5, 10, 23, 0, 0).unwrap(),
        },
        Post {
            id: Some(3),
            author: Author {
                name: "Laís Batista".to_string(),
                avatar_url: "https://avatars.githubusercontent.com/u/20651268?v=4".to_string(),
                role: "Analista II @Coopersystem".to_string(),
            },
            content: vec![
                ContentLine::Paragraph("Oie, passando pra te desejar bons estudos!".to_string()),
                ContentLine::Paragraph(
                    "Acabei de subir mais um projeto no meu portifa. É um projeto que fiz \
                     no NLW Return, evento da Rocketseat. O nome do projeto é DoctorCare 🚀"
                        .to_string(),
                ),
                ContentLine::Link("jane.design/doctorcare".to_string()),
            ],
            published_at: Utc.with_ymd_and_hms(2022, 5, 3, 23, 0, 0).unwrap(),
        },
    ]
}
