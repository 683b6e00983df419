use soroban_sdk::{Address, Env, String, contractevent};

/// ERC-1155 style single transfer; `from` is `None` for mints.
#[contractevent]
#[derive(Clone, Debug)]
pub struct TransferSingle {
    #[topic]
    pub operator: Address,
    #[topic]
    pub from: Option<Address>,
    #[topic]
    pub to: Address,
    pub id: u32,
    pub value: u32,
}

/// Marks the metadata URI of `id` as frozen.
#[contractevent]
#[derive(Clone, Debug)]
pub struct PermanentUri {
    pub value: String,
    #[topic]
    pub id: u32,
}

#[contractevent]
#[derive(Clone, Debug)]
pub struct PauseChanged {
    pub paused: bool,
}

pub fn emit_transfer_single(
    env: &Env,
    operator: Address,
    from: Option<Address>,
    to: Address,
    id: u32,
    value: u32,
) {
    TransferSingle {
        operator,
        from,
        to,
        id,
        value,
    }
    .publish(env);
}

pub fn emit_permanent_uri(env: &Env, value: String, id: u32) {
    PermanentUri { value, id }.publish(env);
}

pub fn emit_pause_changed(env: &Env, paused: bool) {
    PauseChanged { paused }.publish(env);
}
