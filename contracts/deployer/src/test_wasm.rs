//! Deploys the real token WASM through the deployer. Needs
//! `stellar contract build` before `cargo test --features testwasms`.

use crate::deployer::DeployerClient;
use crate::events::Deployed;
use crate::types::ContractKind;
use soroban_sdk::{
    Address, BytesN, Env, Event as _, String, testutils::Address as _, testutils::Events as _,
};

mod nft_token_wasm {
    soroban_sdk::contractimport!(file = "../../target/wasm32v1-none/release/nft_token.wasm");
}

mod objects_wasm {
    soroban_sdk::contractimport!(file = "../../target/wasm32v1-none/release/objects.wasm");
}

fn setup(env: &Env) -> (DeployerClient<'_>, Address) {
    env.mock_all_auths();

    let admin = Address::generate(env);
    let deployer_id = env.register(crate::Deployer, (admin.clone(),));

    (DeployerClient::new(env, &deployer_id), admin)
}

#[test]
fn test_deploy_nft_token() {
    let env = Env::default();
    let (client, admin) = setup(&env);

    let wasm_hash = env.deployer().upload_contract_wasm(nft_token_wasm::WASM);
    let salt = BytesN::from_array(&env, &[1; 32]);
    let predicted = env
        .deployer()
        .with_address(admin.clone(), salt.clone())
        .deployed_address();

    let base_uri = String::from_str(&env, "https://gateway.pinata.cloud/ipfs/metadata/");
    let token_address = client.deploy_nft_token(&wasm_hash, &salt, &base_uri);

    let expected = Deployed {
        kind: ContractKind::NftToken,
        address: token_address.clone(),
        id: 0,
    };
    assert_eq!(
        env.events()
            .all()
            .filter_by_contract(&client.address)
            .events(),
        [expected.to_xdr(&env, &client.address)].as_slice()
    );
    assert_eq!(token_address, predicted);

    let token = nft_token_wasm::Client::new(&env, &token_address);
    assert_eq!(token.total_supply(), 0);
    assert_eq!(token.max_supply(), 20);
    assert_eq!(token.admin(), admin);
    assert_eq!(token.base_uri(), base_uri);

    assert_eq!(client.deployment_count(), 1);
    let deployment = client.deployment(&0);
    assert_eq!(deployment.kind, ContractKind::NftToken);
    assert_eq!(deployment.address, token_address);
}

#[test]
fn test_deploy_objects() {
    let env = Env::default();
    let (client, admin) = setup(&env);

    let token_hash = env.deployer().upload_contract_wasm(nft_token_wasm::WASM);
    client.deploy_nft_token(
        &token_hash,
        &BytesN::from_array(&env, &[1; 32]),
        &String::from_str(&env, "http://localhost/"),
    );

    let wasm_hash = env.deployer().upload_contract_wasm(objects_wasm::WASM);
    let objects_address = client.deploy_objects(&wasm_hash, &BytesN::from_array(&env, &[2; 32]));

    let expected = Deployed {
        kind: ContractKind::Objects,
        address: objects_address.clone(),
        id: 1,
    };
    assert_eq!(
        env.events()
            .all()
            .filter_by_contract(&client.address)
            .events(),
        [expected.to_xdr(&env, &client.address)].as_slice()
    );

    let objects = objects_wasm::Client::new(&env, &objects_address);
    assert_eq!(objects.supply(&1), 100);
    assert_eq!(objects.admin(), admin);

    assert_eq!(client.deployment_count(), 2);
    let deployment = client.deployment(&1);
    assert_eq!(deployment.kind, ContractKind::Objects);
    assert_eq!(deployment.address, objects_address);
}
