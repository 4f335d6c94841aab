//! Category builders for the advisory report.
//!
//! Every builder reads the reading (and tier where relevant) and never
//! mutates it, so the six categories can be composed in any order.

use super::models::{AirQuality, EnvironmentReading, Precautions, RiskTier};

/// Dietary advice. Falls back to a balanced-diet set when no condition applies.
pub fn food(reading: &EnvironmentReading) -> Vec<String> {
    let mut foods: Vec<&str> = Vec::new();

    if reading.air_quality.is_polluted() {
        foods.extend([
            "🥦 Perime të gjelbra të pasura me antioksidantë (brokoli, spinaq)",
            "🍊 Fruta me vitamin C (portokall, kivi, dredhëza)",
            "🐟 Peshk i pasur me omega-3 (salmon, sardele)",
            "🧄 Hudhra dhe qepë për forcimin e sistemit imunitar",
        ]);
    }

    if reading.temperature > 28.0 {
        foods.extend([
            "🥒 Perime me ujë (kastravec, domate, sallate)",
            "🍉 Fruta të freskëta (shalqi, pjepër)",
        ]);
    } else if reading.temperature < 10.0 {
        foods.extend([
            "🍲 Supa të ngrohta me perime",
            "🥣 Ushqime energjike (tërshërë, lidhje të thata)",
        ]);
    }

    if reading.humidity > 70.0 {
        foods.push("🍋 Ushqime me veti kundër-inflamatore (xhenxhefil, limon)");
    }

    if foods.is_empty() {
        foods.extend([
            "🥗 Dieta e balancuar me perime dhe fruta të freskëta",
            "🥜 Fruta të thata dhe arrorë për energji",
        ]);
    }

    owned(foods)
}

/// Hydration advice. Always starts with the base water entry.
pub fn drinks(reading: &EnvironmentReading) -> Vec<String> {
    let mut drinks = vec!["💧 Ujë i bollshëm (të paktën 2 litra në ditë)"];

    if reading.temperature > 25.0 {
        drinks.extend([
            "🧊 Ujë me limon dhe mentë të ftohtë",
            "🥤 Lëngje frutash pa sheqer të shtuar",
        ]);
    }

    if reading.air_quality.is_polluted() {
        drinks.extend([
            "🍵 Çaj jeshil me antioksidantë",
            "🫖 Çaj me xhenxhefil dhe mjaltë",
        ]);
    }

    if reading.humidity < 40.0 {
        drinks.push("🫖 Infuzione bimore hidratuese");
    }

    owned(drinks)
}

/// Activity advice, one fixed set per tier.
pub fn exercises(tier: RiskTier) -> Vec<String> {
    let set: &[&str] = match tier {
        RiskTier::High => &[
            "🏠 Ushtrime të lehta brenda (joga, stretching)",
            "🧘 Ushtrime frymëmarrjeje të thella",
            "⚠️ Shmangni aktivitetin fizik jashtë",
        ],
        RiskTier::Medium => &[
            "🚶 Ecje e lehtë në orët e mëngjesit ose mbrëmjes",
            "🏋️ Ushtrime të moderuara në ambiente të mbyllura",
            "🧘 Joga ose pilates",
        ],
        RiskTier::Low => &[
            "🏃 Vrapim ose ecje e shpejtë",
            "🚴 Çiklizëm në natyrë",
            "🏊 Not (nëse ka pishinë)",
            "🧗 Aktivitete në natyrë",
        ],
    };

    owned(set.iter().copied())
}

/// Best time window for walking. First matching rule wins.
pub fn walk_schedule(reading: &EnvironmentReading, tier: RiskTier) -> String {
    let schedule = if tier == RiskTier::High {
        "⛔ Rekomandohet të qëndroni brenda. Nëse duhet të dilni, bëni këtë vetëm për nevoja urgjente dhe për kohë të shkurtër (15-20 minuta)."
    } else if reading.temperature > 30.0 {
        "🌅 Orari optimal: 06:00-09:00 në mëngjes ose 19:00-21:00 në mbrëmje. Shmangni orët e nxehta 11:00-17:00."
    } else if reading.temperature < 5.0 {
        "☀️ Orari optimal: 11:00-15:00 kur temperatura është më e lartë. Vishuni ngrohtë dhe qëndroni në lëvizje."
    } else if reading.air_quality == AirQuality::Bad {
        // only plain bad air; very_bad falls through to the default
        "🌤️ Ecni herët në mëngjes (06:00-08:00) kur niveli i ndotjes është më i ulët. Shmangni zonat me trafik."
    } else {
        "✨ Çdo orë e ditës është e përshtatshme për ecje. Rekomandohet të paktën 30 minuta ecje ditore."
    };

    schedule.to_string()
}

/// Advice for children, the elderly and asthmatics.
pub fn precautions(tier: RiskTier) -> Precautions {
    let (children, elderly, asthmatic) = match tier {
        RiskTier::High => (
            "👶 Fëmijët duhet të qëndrojnë brenda. Siguroni ajrosje të mirë në ambiente. Shmangni lojërat jashtë.",
            "👴 Personat e moshuar duhet të qëndrojnë në ambiente të mbyllura me ajër të pastër. Kontrolloni shëndetin rregullisht.",
            "🫁 Mbani inhalatorin pranë. Shmangni çdo ekspozim ndaj ajrit të jashtëm. Përdorni maska N95 nëse dilni.",
        ),
        RiskTier::Medium => (
            "👶 Kufizoni kohën e lojërave jashtë. Sigurohuni që fëmijët të pinë ujë të mjaftueshëm.",
            "👴 Kufizoni aktivitetet jashtë. Merrni ilaçet rregullisht dhe qëndroni të hidratuar.",
            "🫁 Mbani inhalatorin pranë gjatë aktiviteteve. Shmangni zonat me trafik të rëndë.",
        ),
        RiskTier::Low => (
            "👶 Fëmijët mund të luajnë normalisht jashtë. Siguroni hidratim të mirë.",
            "👴 Aktivitete normale me kujdes për temperaturën. Ecje e lehtë është e rekomanduar.",
            "🫁 Mund të bëni aktivitete normale duke pasur inhalatorin pranë si masë paraprake.",
        ),
    };

    Precautions {
        children: children.to_string(),
        elderly: elderly.to_string(),
        asthmatic: asthmatic.to_string(),
    }
}

/// When to consult a doctor.
pub fn seek_doctor(tier: RiskTier) -> String {
    match tier {
        RiskTier::High => "🏥 Konsultoni mjekun nëse përjetoni: vështirësi në frymëmarrje, dhimbje gjoksi, marramendje, kollë të vazhdueshme, ose çdo simptomë të pazakontë. Për emergjenca, telefononi 127.",
        RiskTier::Medium => "🏥 Kërkoni ndihmë mjekësore nëse keni simptoma të vazhdueshme si kollë, irritim të syve, ose lodhje të pazakontë që zgjat më shumë se 2-3 ditë.",
        RiskTier::Low => "🏥 Kontrollohuni tek mjeku rregullisht. Kërkoni ndihmë nëse vëreni simptoma të reja ose të pazakonta.",
    }
    .to_string()
}

fn owned<'a>(items: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    items.into_iter().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(air_quality: AirQuality, temperature: f64, humidity: f64) -> EnvironmentReading {
        EnvironmentReading { air_quality, temperature, humidity, gas_level: 0 }
    }

    #[test]
    fn test_food_fallback_when_nothing_matches() {
        let foods = food(&reading(AirQuality::Good, 20.0, 50.0));
        assert_eq!(foods.len(), 2);
        assert!(foods[0].contains("Dieta e balancuar"));
    }

    #[test]
    fn test_food_all_conditions_in_order() {
        let foods = food(&reading(AirQuality::VeryBad, 35.0, 90.0));

        // 4 antioxidant + 2 cooling + 1 anti-inflammatory
        assert_eq!(foods.len(), 7);
        assert!(foods[0].starts_with("🥦"));
        assert!(foods[4].starts_with("🥒"));
        assert!(foods[6].starts_with("🍋"));
        assert!(!foods.iter().any(|f| f.contains("Dieta e balancuar")));
    }

    #[test]
    fn test_food_cold_weather() {
        let foods = food(&reading(AirQuality::VeryGood, 2.0, 50.0));
        assert_eq!(foods.len(), 2);
        assert!(foods[0].starts_with("🍲"));
    }

    #[test]
    fn test_drinks_base_entry_always_first() {
        let base = drinks(&reading(AirQuality::Good, 20.0, 50.0));
        assert_eq!(base, vec!["💧 Ujë i bollshëm (të paktën 2 litra në ditë)".to_string()]);

        let all = drinks(&reading(AirQuality::Bad, 30.0, 30.0));
        assert_eq!(all.len(), 6);
        assert_eq!(all[0], base[0]);
        assert!(all[5].contains("Infuzione"));
    }

    #[test]
    fn test_exercises_per_tier() {
        assert_eq!(exercises(RiskTier::High).len(), 3);
        assert_eq!(exercises(RiskTier::Medium).len(), 3);

        let low = exercises(RiskTier::Low);
        assert_eq!(low.len(), 4);
        assert!(low[0].starts_with("🏃"));
        assert!(low[3].starts_with("🧗"));
    }

    #[test]
    fn test_walk_schedule_priority() {
        let hot_bad = reading(AirQuality::Bad, 33.0, 50.0);
        assert!(walk_schedule(&hot_bad, RiskTier::High).starts_with("⛔"));
        assert!(walk_schedule(&hot_bad, RiskTier::Medium).starts_with("🌅"));

        let cold_bad = reading(AirQuality::Bad, 0.0, 50.0);
        assert!(walk_schedule(&cold_bad, RiskTier::Medium).starts_with("☀️"));

        let mild_bad = reading(AirQuality::Bad, 20.0, 50.0);
        assert!(walk_schedule(&mild_bad, RiskTier::Low).starts_with("🌤️"));

        let mild_very_bad = reading(AirQuality::VeryBad, 20.0, 50.0);
        assert!(walk_schedule(&mild_very_bad, RiskTier::Medium).starts_with("✨"));
    }

    #[test]
    fn test_precautions_complete_for_every_tier() {
        for tier in RiskTier::ALL {
            let p = precautions(tier);
            assert!(!p.children.is_empty());
            assert!(!p.elderly.is_empty());
            assert!(!p.asthmatic.is_empty());
        }
        assert_ne!(precautions(RiskTier::Low), precautions(RiskTier::High));
    }

    #[test]
    fn test_seek_doctor_distinct_per_tier() {
        let advice: Vec<String> = RiskTier::ALL.iter().map(|&t| seek_doctor(t)).collect();
        assert_ne!(advice[0], advice[1]);
        assert_ne!(advice[1], advice[2]);
        assert!(advice[2].contains("127"));
    }

    #[test]
    fn test_food_thresholds_are_exclusive() {
        let fallback = food(&reading(AirQuality::Good, 20.0, 50.0));

        assert_eq!(food(&reading(AirQuality::Good, 28.0, 50.0)), fallback);
        assert!(food(&reading(AirQuality::Good, 28.1, 50.0))[0].starts_with("🥒"));

        assert_eq!(food(&reading(AirQuality::Good, 10.0, 50.0)), fallback);
        assert!(food(&reading(AirQuality::Good, 9.9, 50.0))[0].starts_with("🍲"));

        assert_eq!(food(&reading(AirQuality::Good, 20.0, 70.0)), fallback);
        let humid = food(&reading(AirQuality::Good, 20.0, 70.1));
        assert_eq!(humid.len(), 1);
        assert!(humid[0].starts_with("🍋"));
    }

    #[test]
    fn test_drinks_thresholds_are_exclusive() {
        assert_eq!(drinks(&reading(AirQuality::Good, 25.0, 50.0)).len(), 1);
        let warm = drinks(&reading(AirQuality::Good, 25.1, 50.0));
        assert_eq!(warm.len(), 3);
        assert!(warm[1].starts_with("🧊"));

        assert_eq!(drinks(&reading(AirQuality::Good, 20.0, 40.0)).len(), 1);
        let dry = drinks(&reading(AirQuality::Good, 20.0, 39.9));
        assert_eq!(dry.len(), 2);
        assert!(dry[1].contains("Infuzione"));
    }

    #[test]
    fn test_walk_schedule_thresholds_are_exclusive() {
        let any_hour = "✨";

        assert!(walk_schedule(&reading(AirQuality::Good, 30.0, 50.0), RiskTier::Low).starts_with(any_hour));
        assert!(walk_schedule(&reading(AirQuality::Good, 30.1, 50.0), RiskTier::Low).starts_with("🌅"));

        assert!(walk_schedule(&reading(AirQuality::Good, 5.0, 50.0), RiskTier::Low).starts_with(any_hour));
        assert!(walk_schedule(&reading(AirQuality::Good, 4.9, 50.0), RiskTier::Low).starts_with("☀️"));
    }
}
