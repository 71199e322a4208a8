// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Demo data set for Teresina, PI (Brazil).

use chrono::{DateTime, NaiveDate, Utc};
use std::collections::BTreeSet;

use crate::models::{
    Business, BusinessCategory, Challenge, ContactInfo, GeoPoint, MapElement, MapElementType,
    Post, ReportDetails, ReportStatus, ReportType, Reward, RewardCategory, TransportType, User,
};

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(hour, minute, 0))
        .map(|n| n.and_utc())
        .unwrap_or_default()
}

fn day(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    at(year, month, day, 0, 0)
}

#[allow(clippy::too_many_arguments)]
fn user(
    id: &str,
    username: &str,
    email: &str,
    avatar: &str,
    points: u64,
    prefs: &[TransportType],
    co2: f64,
    kcal: f64,
    money: f64,
    created_at: DateTime<Utc>,
) -> User {
    User {
        id: id.to_string(),
        username: username.to_string(),
        email: email.to_string(),
        avatar_url: Some(avatar.to_string()),
        points,
        points_spent: 0,
        transport_preferences: prefs.iter().copied().collect::<BTreeSet<_>>(),
        co2_saved: co2,
        calories_burned: kcal,
        money_saved: money,
        created_at,
        is_anonymous: false,
    }
}

pub fn users() -> Vec<User> {
    vec![
        user(
            "user1",
            "Maria Silva",
            "maria@example.com",
            "https://images.pexels.com/photos/1239291/pexels-photo-1239291.jpeg",
            1250,
            &[TransportType::Cycling, TransportType::Walking],
            150.0,
            2500.0,
            350.0,
            day(2023, 1, 1),
        ),
        user(
            "user2",
            "Carlos Oliveira",
            "carlos@example.com",
            "https://images.pexels.com/photos/220453/pexels-photo-220453.jpeg",
            850,
            &[TransportType::Bus, TransportType::Walking],
            100.0,
            1500.0,
            250.0,
            day(2023, 2, 1),
        ),
        user(
            "user3",
            "Ana Martins",
            "ana@example.com",
            "https://images.pexels.com/photos/1065084/pexels-photo-1065084.jpeg",
            1560,
            &[TransportType::Cycling, TransportType::Carpool],
            200.0,
            3000.0,
            400.0,
            day(2023, 3, 1),
        ),
    ]
}

fn author(id: &str) -> Option<User> {
    users().into_iter().find(|u| u.id == id)
}

pub fn posts() -> Vec<Post> {
    vec![
        Post {
            id: "1".to_string(),
            user_id: "user1".to_string(),
            user: author("user1"),
            content: "Acabei de completar meu passeio diário de bicicleta para o trabalho! \
                      Salvando o planeta pedalando de cada vez. 🚲"
                .to_string(),
            media_urls: vec![
                "https://images.pexels.com/photos/1431117/pexels-photo-1431117.jpeg".to_string(),
            ],
            location: Some(GeoPoint::new(-5.0914, -42.8038)),
            likes: 24,
            comments: 5,
            created_at: at(2023, 5, 15, 8, 30),
            report: None,
        },
        Post {
            id: "2".to_string(),
            user_id: "user2".to_string(),
            user: author("user2"),
            content: "Encontrei um buraco na Av. Frei Serafim. É bastante perigoso para \
                      ciclistas e motociclistas. As autoridades podem, por favor, consertar isso?"
                .to_string(),
            media_urls: vec![
                "https://images.pexels.com/photos/2835763/pexels-photo-2835763.jpeg".to_string(),
            ],
            location: Some(GeoPoint::new(-5.0891, -42.8019)),
            likes: 45,
            comments: 12,
            created_at: at(2023, 5, 14, 15, 20),
            report: Some(ReportDetails {
                report_type: ReportType::Infrastructure,
                status: ReportStatus::Investigating,
            }),
        },
        Post {
            id: "3".to_string(),
            user_id: "user3".to_string(),
            user: author("user3"),
            content: "É com grande alegria que informo que a ciclovia na Av. Raul Lopes foi \
                      concluída! Agora posso pedalar com segurança. Agradecemos à \
                      prefeitura por ouvir nosso feedback!"
                .to_string(),
            media_urls: vec![
                "https://images.pexels.com/photos/686230/pexels-photo-686230.jpeg".to_string(),
            ],
            location: Some(GeoPoint::new(-5.0830, -42.7990)),
            likes: 78,
            comments: 8,
            created_at: at(2023, 5, 10, 9, 45),
            report: Some(ReportDetails {
                report_type: ReportType::Infrastructure,
                status: ReportStatus::Resolved,
            }),
        },
    ]
}

pub fn businesses() -> Vec<Business> {
    vec![
        Business {
            id: "b1".to_string(),
            name: "Café Sustentável".to_string(),
            description: "Café ecológico com ótimo café".to_string(),
            logo_url: "https://images.pexels.com/photos/1291712/pexels-photo-1291712.jpeg"
                .to_string(),
            cover_image_url: None,
            address: "Av. Raul Lopes, 1000".to_string(),
            location: GeoPoint::new(-5.0845, -42.7950),
            category: BusinessCategory::Cafe,
            contact_info: ContactInfo {
                phone: Some("8699999999".to_string()),
                email: Some("cafe@example.com".to_string()),
                website: Some("https://example.com".to_string()),
            },
            is_partner: true,
            partner_since: Some(day(2023, 1, 1)),
        },
        Business {
            id: "b2".to_string(),
            name: "Loja de Bicicletas Teresina".to_string(),
            description: "Sua loja de bicicletas local".to_string(),
            logo_url: "https://images.pexels.com/photos/276517/pexels-photo-276517.jpeg"
                .to_string(),
            cover_image_url: None,
            address: "Av. Frei Serafim, 2050".to_string(),
            location: GeoPoint::new(-5.0860, -42.7920),
            category: BusinessCategory::Retail,
            contact_info: ContactInfo {
                phone: Some("8699999998".to_string()),
                email: Some("bikeshop@example.com".to_string()),
                website: Some("https://example.com/bike".to_string()),
            },
            is_partner: true,
            partner_since: Some(day(2023, 2, 15)),
        },
        Business {
            id: "b3".to_string(),
            name: "Eco Market".to_string(),
            description: "Produtos orgânicos e locais".to_string(),
            logo_url: "https://images.pexels.com/photos/264636/pexels-photo-264636.jpeg"
                .to_string(),
            cover_image_url: None,
            address: "Rua Lisandro Nogueira, 1650".to_string(),
            location: GeoPoint::new(-5.0880, -42.8000),
            category: BusinessCategory::Retail,
            contact_info: ContactInfo {
                phone: Some("8699999997".to_string()),
                email: Some("ecomarket@example.com".to_string()),
                website: Some("https://example.com/eco".to_string()),
            },
            is_partner: true,
            partner_since: Some(day(2023, 3, 10)),
        },
    ]
}

fn business(id: &str) -> Option<Business> {
    businesses().into_iter().find(|b| b.id == id)
}

pub fn rewards() -> Vec<Reward> {
    vec![
        Reward {
            id: "1".to_string(),
            business_id: "b1".to_string(),
            business: business("b1"),
            title: "20% Off em qualquer café".to_string(),
            description: "Get 20% off any coffee drink when you show your earned points."
                .to_string(),
            points_cost: 150,
            discount: "20% off".to_string(),
            valid_until: day(2024, 12, 31),
            image_url: Some(
                "https://images.pexels.com/photos/312418/pexels-photo-312418.jpeg".to_string(),
            ),
            category: RewardCategory::Food,
            terms_and_conditions: "Válido para uso único. Não cumulativo com outras ofertas."
                .to_string(),
        },
        Reward {
            id: "2".to_string(),
            business_id: "b2".to_string(),
            business: business("b2"),
            title: "20% OFF Na revisão da bicicleta".to_string(),
            description:
                "Resgate seus pontos para um serviço completo de manutenção da sua bicicleta."
                    .to_string(),
            points_cost: 300,
            discount: "Free Service".to_string(),
            valid_until: day(2024, 12, 31),
            image_url: Some(
                "https://images.pexels.com/photos/1149601/pexels-photo-1149601.jpeg".to_string(),
            ),
            category: RewardCategory::Services,
            terms_and_conditions: "Appointment required. Basic tune-up only.".to_string(),
        },
        Reward {
            id: "3".to_string(),
            business_id: "b3".to_string(),
            business: business("b3"),
            title: "15% Off em produtos orgânicos".to_string(),
            description: "Ganhe desconto em produtos orgânicos frescos e locais.".to_string(),
            points_cost: 200,
            discount: "15% off".to_string(),
            valid_until: day(2024, 12, 31),
            image_url: Some(
                "https://images.pexels.com/photos/1656663/pexels-photo-1656663.jpeg".to_string(),
            ),
            category: RewardCategory::Food,
            terms_and_conditions: "Válido em compras de R$ 50 ou mais.".to_string(),
        },
    ]
}

pub fn challenges() -> Vec<Challenge> {
    vec![
        Challenge {
            id: "1".to_string(),
            title: "Semana de Bicicleta para o Trabalho".to_string(),
            description: "Deslocar-se de bicicleta durante 5 dias úteis consecutivos".to_string(),
            points_reward: 500,
            required_action: TransportType::Cycling.to_string(),
            required_count: 5,
            duration: 7,
            image_url: Some(
                "https://images.pexels.com/photos/1149601/pexels-photo-1149601.jpeg".to_string(),
            ),
            start_date: day(2023, 6, 1),
            end_date: day(2023, 6, 7),
            participants: 128,
        },
        Challenge {
            id: "2".to_string(),
            title: "Campeão de Transporte Público".to_string(),
            description: "Use o transporte público 10 vezes por mês".to_string(),
            points_reward: 300,
            required_action: TransportType::Bus.to_string(),
            required_count: 10,
            duration: 30,
            image_url: Some(
                "https://images.pexels.com/photos/2031577/pexels-photo-2031577.jpeg".to_string(),
            ),
            start_date: day(2023, 6, 1),
            end_date: day(2023, 6, 30),
            participants: 243,
        },
        Challenge {
            id: "3".to_string(),
            title: "Explorador ambulante".to_string(),
            description: "Caminhe 50.000 passos em uma semana".to_string(),
            points_reward: 400,
            required_action: TransportType::Walking.to_string(),
            required_count: 50_000,
            duration: 7,
            image_url: Some(
                "https://images.pexels.com/photos/775418/pexels-photo-775418.jpeg".to_string(),
            ),
            start_date: day(2023, 6, 8),
            end_date: day(2023, 6, 14),
            participants: 87,
        },
    ]
}

pub fn map_elements() -> Vec<MapElement> {
    let elements = [
        MapElement::line(
            "bike1",
            MapElementType::BikeLane,
            "Av. Raul Lopes Bike Lane",
            vec![
                GeoPoint::new(-5.0830, -42.7990),
                GeoPoint::new(-5.0845, -42.7950),
                GeoPoint::new(-5.0860, -42.7920),
            ],
        )
        .map(|e| e.with_description("Bike lane along Av. Raul Lopes")),
        MapElement::line(
            "bus1",
            MapElementType::BusRoute,
            "T1 - Circular",
            vec![
                GeoPoint::new(-5.0914, -42.8038),
                GeoPoint::new(-5.0900, -42.8000),
                GeoPoint::new(-5.0880, -42.7980),
                GeoPoint::new(-5.0860, -42.7960),
            ],
        )
        .map(|e| e.with_description("Main bus route around the city center")),
        MapElement::line(
            "sidewalk1",
            MapElementType::SafeSidewalk,
            "Av. Frei Serafim Sidewalk",
            vec![
                GeoPoint::new(-5.0891, -42.8019),
                GeoPoint::new(-5.0896, -42.8000),
                GeoPoint::new(-5.0901, -42.7985),
            ],
        )
        .map(|e| e.with_description("Well-maintained sidewalk along Av. Frei Serafim")),
        MapElement::point(
            "report1",
            MapElementType::ReportHotspot,
            "Pothole Cluster",
            GeoPoint::new(-5.0891, -42.8019),
        )
        .map(|e| e.with_description("Area with multiple pothole reports")),
        MapElement::point(
            "report2",
            MapElementType::ReportHotspot,
            "Traffic Light Issue",
            GeoPoint::new(-5.0880, -42.7980),
        )
        .map(|e| e.with_description("Reports of traffic light malfunction")),
        MapElement::point(
            "business1",
            MapElementType::BusinessLocation,
            "Café Sustentável",
            GeoPoint::new(-5.0845, -42.7950),
        )
        .map(|e| e.with_description("Eco-friendly café with discounts for cyclists")),
        MapElement::point(
            "business2",
            MapElementType::BusinessLocation,
            "Bike Shop",
            GeoPoint::new(-5.0860, -42.7920),
        )
        .map(|e| e.with_description("Bicycle repairs and accessories")),
    ];

    elements
        .into_iter()
        .filter_map(|e| match e {
            Ok(element) => Some(element),
            Err(err) => {
                tracing::warn!(error = %err, "Skipping invalid seed map element");
                None
            }
        })
        .collect()
}
