// Path templates for every resource exposed by the API.
// `{}` marks a segment filled with a percent-encoded identifier.

pub const BASE_ENDPOINT: &str = "https://api.clashofclans.com/v1";

pub const CLANS: &str = "/clans";
pub const CLAN: &str = "/clans/{}";
pub const CLAN_MEMBERS: &str = "/clans/{}/members";
pub const CLAN_WAR_LOG: &str = "/clans/{}/warlog";
pub const CLAN_CURRENT_WAR: &str = "/clans/{}/currentwar";
pub const CLAN_LEAGUE_GROUP: &str = "/clans/{}/currentwar/leaguegroup";
pub const WAR_LEAGUE: &str = "/clanwarleagues/wars/{}";
pub const PLAYER: &str = "/players/{}";
pub const LEAGUES: &str = "/leagues";
pub const LEAGUE: &str = "/leagues/{}";
pub const LEAGUE_SEASONS: &str = "/leagues/{}/seasons";
pub const LEAGUE_SEASON_RANKINGS: &str = "/leagues/{}/seasons/{}";
pub const LOCATIONS: &str = "/locations";
pub const LOCATION: &str = "/locations/{}";
pub const LOCATION_CLAN_RANKINGS: &str = "/locations/{}/rankings/clans";
pub const LOCATION_PLAYER_RANKINGS: &str = "/locations/{}/rankings/players";
pub const LOCATION_CLAN_VERSUS_RANKINGS: &str = "/locations/{}/rankings/clans-versus";
pub const LOCATION_PLAYER_VERSUS_RANKINGS: &str = "/locations/{}/rankings/players-versus";

const PLACEHOLDER: &str = "{}";

/// Percent-encodes an identifier as one opaque path segment.
///
/// Only ASCII alphanumerics and `-`, `_`, `.`, `~` survive; `#`, `/`, `?` and
/// everything else (including non-ASCII bytes) is escaped.
pub fn encode_segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

/// Substitutes encoded `params` into the `{}` slots of `template`, left to right.
///
/// Surplus placeholders are left as-is and surplus params are ignored; the
/// templates in this module always pair up with their callers.
pub fn build_path(template: &str, params: &[&str]) -> String {
    let mut path = String::with_capacity(template.len() + params.iter().map(|p| p.len() * 3).sum::<usize>());
    let mut rest = template;
    let mut params = params.iter();

    while let Some(idx) = rest.find(PLACEHOLDER) {
        path.push_str(&rest[..idx]);
        match params.next() {
            Some(param) => path.push_str(&encode_segment(param)),
            None => path.push_str(PLACEHOLDER),
        }
        rest = &rest[idx + PLACEHOLDER.len()..];
    }
    path.push_str(rest);

    path
}
