use soroban_sdk::{Address, Env, contractevent};

/// `from` is `None` for mints.
#[contractevent]
#[derive(Clone, Debug)]
pub struct Transfer {
    #[topic]
    pub from: Option<Address>,
    #[topic]
    pub to: Address,
    pub token_id: u32,
}

#[contractevent]
#[derive(Clone, Debug)]
pub struct PauseChanged {
    pub paused: bool,
}

pub fn emit_transfer(env: &Env, from: Option<Address>, to: Address, token_id: u32) {
    Transfer { from, to, token_id }.publish(env);
}

pub fn emit_pause_changed(env: &Env, paused: bool) {
    PauseChanged { paused }.publish(env);
}
