//! SQL text of the five reports.
//!
//! Every query binds the year as `$1` (inclusive) and `$2` (exclusive).
//! Category filters are bound as a text array in `$3`.

/// Category restriction applied by a query through `$3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter {
    None,
    Only(&'static [&'static str]),
    Exclude(&'static [&'static str]),
}

impl CategoryFilter {
    pub fn values(&self) -> Option<&'static [&'static str]> {
        match self {
            CategoryFilter::None => None,
            CategoryFilter::Only(v) | CategoryFilter::Exclude(v) => Some(v),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportQuery {
    pub name: &'static str,
    pub sql: &'static str,
    pub filter: CategoryFilter,
}

pub const GAME_TYPES: &[&str] = &["dm", "ctf", "duel", "cts", "tdm", "ft"];

/// Utility weapons left out of the damage chart.
pub const DAMAGE_EXCLUDED_WEAPONS: &[&str] = &["vaporizer", "hook", "tuba"];

/// Utility and rarely fragging weapons left out of the frags chart.
pub const FRAGS_EXCLUDED_WEAPONS: &[&str] = &[
    "vaporizer",
    "hook",
    "tuba",
    "rifle",
    "seeker",
    "fireball",
    "hlac",
    "minelayer",
];

/// Player id of the "world" pseudo-player (bots, environment kills).
pub const WORLD_PLAYER_ID: i32 = 1;

pub const GAMES_PER_MONTH: ReportQuery = ReportQuery {
    name: "games per month",
    sql: "SELECT game_type_cd AS category,
                 date_trunc('month', create_dt)::date AS bucket_start,
                 to_char(create_dt, 'Mon') AS bucket,
                 count(*) AS metric
          FROM games
          WHERE create_dt >= $1::date AND create_dt < $2::date
            AND game_type_cd = ANY($3::text[])
          GROUP BY 1, 2, 3
          ORDER BY 1, 2",
    filter: CategoryFilter::Only(GAME_TYPES),
};

// Both tables are partitioned by create_dt: each one gets the range.
pub const PLAYERS_PER_MONTH: ReportQuery = ReportQuery {
    name: "players per month",
    sql: "SELECT NULL::text AS category,
                 date_trunc('month', g.create_dt)::date AS bucket_start,
                 to_char(g.create_dt, 'Mon') AS bucket,
                 count(DISTINCT pgs.player_id) AS metric
          FROM games g
          JOIN player_game_stats pgs ON g.game_id = pgs.game_id
          WHERE g.create_dt >= $1::date AND g.create_dt < $2::date
            AND pgs.create_dt >= $1::date AND pgs.create_dt < $2::date
            AND pgs.player_id > 1
          GROUP BY 2, 3
          ORDER BY 2",
    filter: CategoryFilter::None,
};

pub const HOURS_PLAYED: ReportQuery = ReportQuery {
    name: "hours played",
    sql: "SELECT to_char(create_dt, 'D')::int AS day_num,
                 to_char(create_dt, 'HH24')::int AS hour_num,
                 count(*) AS metric
          FROM games
          WHERE create_dt >= $1::date AND create_dt < $2::date
          GROUP BY 1, 2
          ORDER BY 1, 2",
    filter: CategoryFilter::None,
};

pub const WEAPON_DAMAGE_PER_MONTH: ReportQuery = ReportQuery {
    name: "weapon damage per month",
    sql: "SELECT pws.weapon_cd AS category,
                 date_trunc('month', pws.create_dt)::date AS bucket_start,
                 to_char(pws.create_dt, 'Mon') AS bucket,
                 sum(pws.actual)::bigint AS metric
          FROM player_weapon_stats pws
          JOIN cd_weapon cd ON pws.weapon_cd = cd.weapon_cd
          WHERE pws.create_dt >= $1::date AND pws.create_dt < $2::date
            AND cd.weapon_cd <> ALL($3::text[])
          GROUP BY 1, 2, 3
          ORDER BY 1, 2",
    filter: CategoryFilter::Exclude(DAMAGE_EXCLUDED_WEAPONS),
};

pub const WEAPON_FRAGS_PER_MONTH: ReportQuery = ReportQuery {
    name: "weapon frags per month",
    sql: "SELECT pws.weapon_cd AS category,
                 date_trunc('month', pws.create_dt)::date AS bucket_start,
                 to_char(pws.create_dt, 'Mon') AS bucket,
                 sum(pws.frags)::bigint AS metric
          FROM player_weapon_stats pws
          JOIN cd_weapon cd ON pws.weapon_cd = cd.weapon_cd
          WHERE pws.create_dt >= $1::date AND pws.create_dt < $2::date
            AND cd.weapon_cd <> ALL($3::text[])
          GROUP BY 1, 2, 3
          ORDER BY 1, 2",
    filter: CategoryFilter::Exclude(FRAGS_EXCLUDED_WEAPONS),
};

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [ReportQuery; 5] = [
        GAMES_PER_MONTH,
        PLAYERS_PER_MONTH,
        HOURS_PLAYED,
        WEAPON_DAMAGE_PER_MONTH,
        WEAPON_FRAGS_PER_MONTH,
    ];

    #[test]
    fn test_every_query_is_bounded_by_the_range() {
        for q in ALL {
            assert!(q.sql.contains(">= $1::date"), "{}", q.name);
            assert!(q.sql.contains("< $2::date"), "{}", q.name);
        }
    }

    #[test]
    fn test_filter_placeholder_matches_filter_kind() {
        for q in ALL {
            assert_eq!(q.sql.contains("$3"), q.filter.values().is_some(), "{}", q.name);
        }
    }

    #[test]
    fn test_monthly_queries_select_a_dated_bucket_start() {
        for q in ALL.iter().filter(|q| q.name != HOURS_PLAYED.name) {
            assert!(q.sql.contains(")::date AS bucket_start"), "{}", q.name);
        }
    }

    #[test]
    fn test_players_query_filters_both_tables_and_world() {
        let sql = PLAYERS_PER_MONTH.sql;
        assert!(sql.contains("g.create_dt >= $1::date"));
        assert!(sql.contains("pgs.create_dt >= $1::date"));
        assert!(sql.contains(&format!("pgs.player_id > {WORLD_PLAYER_ID}")));
    }

    #[test]
    fn test_frags_deny_list_extends_damage_deny_list() {
        for w in DAMAGE_EXCLUDED_WEAPONS {
            assert!(FRAGS_EXCLUDED_WEAPONS.contains(w));
        }
        assert_ne!(DAMAGE_EXCLUDED_WEAPONS, FRAGS_EXCLUDED_WEAPONS);
    }
}
