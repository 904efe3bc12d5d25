#![recursion_limit = "2048"]

macro_rules! log {
    ( $( $t:tt )* ) => {
        web_sys::console::log_1(&format!( $( $t )* ).into());
    }
}

mod audio;
mod components;
mod particles;
mod views;

use anyhow::{anyhow, Result};
use wasm_bindgen::prelude::*;
use web_sys::Element;
use yew::{html, Component, ComponentLink, Html, ShouldRender};

use crate::particles::ParticleField;
use crate::views::proposal::ProposalPage;

#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

const MOUNT_ID: &str = "app";
const PARTICLE_COUNT: u32 = 40;

pub struct App;

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_: Self::Properties, _link: ComponentLink<Self>) -> Self {
        App
    }

    fn update(&mut self, _msg: Self::Message) -> ShouldRender {
        false
    }

    fn change(&mut self, _props: Self::Properties) -> ShouldRender {
        false
    }

    fn view(&self) -> Html {
        html! {
            <>
                <ParticleField count=PARTICLE_COUNT />
                <ProposalPage />
            </>
        }
    }
}

fn mount_point() -> Result<Element> {
    yew::utils::document()
        .get_element_by_id(MOUNT_ID)
        .ok_or_else(|| anyhow!("missing #{} element, cannot mount the application", MOUNT_ID))
}

#[wasm_bindgen]
pub fn run_app() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let root = mount_point().map_err(|err| JsValue::from_str(&err.to_string()))?;
    log!("mounting on #{}", MOUNT_ID);
    yew::App::<App>::new().mount(root);
    Ok(())
}
