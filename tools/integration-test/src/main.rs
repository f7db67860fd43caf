use anyhow::ensure;
use golfer_registry::{GolferRegistry, GolferResult, RawGolfer, Tournament};
use payout_engine::format::abbreviate_currency;
use payout_engine::{compute_payouts, PayoutConfig, PayoutCurve, SpecialPayout};
use pool_standings::{
    compute_standings, display_rank, pick_breakdown, season_leaderboard, top_picked, Participant,
    RosterRules,
};

fn raw(name: &str, position: &str, score: &str, thru: &str) -> RawGolfer {
    RawGolfer {
        name: name.to_string(),
        position: position.to_string(),
        score: score.to_string(),
        thru_status: thru.to_string(),
        round: None,
        country: None,
        rounds: vec![],
    }
}

fn picks(names: &[&str]) -> Vec<Option<String>> {
    names.iter().map(|n| if n.is_empty() { None } else { Some(n.to_string()) }).collect()
}

fn main() -> anyhow::Result<()> {
    println!("🚀 Starting Fantasy Golf Pool Integration Test");

    // Stage 1: leaderboard snapshot for a $1M tournament, including an
    // amateur, a cut golfer, and a tie at 2nd.
    println!("\n⛳ Test 1: Building leaderboard registry...");
    let tournament =
        Tournament { name: "Integration Invitational".to_string(), purse: 1_000_000.0, year: 2025 };
    let rows = vec![
        raw("Scottie Scheffler", "1", "-12", "F"),
        raw("Rory McIlroy", "T2", "-8", "F"),
        raw("Ludvig Aberg", "T2", "-8", "F"),
        raw("Gordon Sargent", "4", "-6", "F"), // amateur, forfeits payout
        raw("Collin Morikawa", "5", "-5", "F"),
        raw("Jordan Spieth", "CUT", "+6", "F"),
    ];
    let golfers: Vec<GolferResult> = rows.into_iter().map(GolferResult::from_raw).collect();
    let registry = GolferRegistry::new(golfers.clone());
    println!("✅ Registry holds {} golfers", registry.len());

    // Stage 2: payouts over the head of the standard PGA curve.
    println!("\n💰 Test 2: Computing payouts...");
    let mut config =
        PayoutConfig::new(PayoutCurve::new(vec![18.0, 10.9, 6.9, 4.9, 4.1]));
    config.amateurs.insert("Gordon Sargent".to_string());
    config.special.insert(
        "Collin Morikawa".to_string(),
        SpecialPayout { enabled: true, payout: 60_000.0 },
    );

    let payouts = compute_payouts(&tournament, &golfers, &config);
    for p in &payouts {
        println!("   {} {} ({}) -> ${}", p.position, p.name, p.score, p.payout_display());
    }

    let payout_of = |name: &str| payouts.iter().find(|p| p.name == name).map(|p| p.payout);
    ensure!(payout_of("Scottie Scheffler") == Some(180_000.0), "winner takes 18%");
    ensure!(payout_of("Rory McIlroy") == Some(89_000.0), "tie splits 10.9% + 6.9%");
    ensure!(payout_of("Ludvig Aberg") == Some(89_000.0), "tie splits 10.9% + 6.9%");
    // Cursor correction: the amateur vacates the 4th percentage, so the
    // next paid golfer computes from position 4 — but the override wins.
    ensure!(payout_of("Collin Morikawa") == Some(60_000.0), "special payout override");
    ensure!(payout_of("Gordon Sargent").is_none(), "amateur excluded");
    ensure!(payout_of("Jordan Spieth").is_none(), "cut excluded");
    println!("✅ Payouts match expected allocation");

    // Stage 3: pool standings.
    println!("\n🏆 Test 3: Computing standings...");
    let mut justin = Participant::new(
        "justin",
        picks(&["Scottie Scheffler", "Collin Morikawa"]),
    );
    justin.season_winnings = 17_857_526.0;
    let mut davis = Participant::new("davis", picks(&["Rory McIlroy", "Ludvig Aberg"]));
    davis.season_winnings = 11_926_164.0;
    let wesley = Participant::new("wesley", picks(&["Scottie Scheffler", ""]));
    let participants = vec![davis.clone(), justin.clone(), wesley];

    let standings = compute_standings(&participants, &payouts, &registry);
    for entry in &standings {
        let rank = entry.rank.map(display_rank).unwrap_or_else(|| "--".to_string());
        println!(
            "   {} {} | score {} | ${}",
            rank,
            entry.participant.username,
            entry.total_score,
            abbreviate_currency(entry.total_winnings)
        );
    }
    ensure!(standings[0].participant.username == "justin", "justin leads with $240k");
    ensure!(standings[0].total_winnings == 240_000.0, "180k + 60k override");
    ensure!(standings[1].participant.username == "davis", "davis second with $178k");
    ensure!(standings[2].rank.is_none(), "incomplete slate is unranked");
    println!("✅ Standings ranked correctly");

    // Stage 4: per-pick breakdown ordering.
    println!("\n📋 Test 4: Pick breakdown...");
    let lines = pick_breakdown(&justin, &payouts, &registry);
    ensure!(lines[0].golfer == "Scottie Scheffler", "highest payout first");
    ensure!(lines[1].golfer == "Collin Morikawa");
    println!("✅ Picks ordered by payout");

    // Stage 5: season leaderboard and popularity.
    println!("\n📈 Test 5: Season views...");
    let season = season_leaderboard(&participants);
    ensure!(season[0].username == "justin");
    let top = top_picked(&participants, 3);
    ensure!(top[0].name == "Scottie Scheffler" && top[0].count == 2);
    println!(
        "   Season leader: {} (${})",
        season[0].username,
        abbreviate_currency(season[0].season_winnings)
    );
    println!("   Most picked: {} ({:.1}%)", top[0].name, top[0].percentage);
    println!("✅ Season views consistent");

    // Stage 6: roster rules.
    println!("\n📝 Test 6: Roster rules...");
    let rules = RosterRules::default();
    let status = rules.evaluate(&picks(&["A", "B", "C", "D", "E", "F"]));
    ensure!(status.save_allowed(), "full slate under cap saves");
    println!("✅ Roster evaluation passed");

    println!("\n🎉 All integration checks passed!");
    Ok(())
}
