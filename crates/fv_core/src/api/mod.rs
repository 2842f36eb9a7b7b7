pub mod roster_json;

pub use roster_json::{
    get_player_json, list_players_json, load_roster_json, save_roster_json, PlayerQuery,
    RosterViewResponse, SaveRosterRequest, SaveRosterResponse,
};
