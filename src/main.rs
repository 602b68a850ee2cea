//! Firmware entry point for the nRF52840.
//!
//! Brings up the Embassy executor, initialises the USB HID mouse
//! device, and spawns two tasks:
//!
//! - the USB device runner (enumeration, suspend/resume, endpoints)
//! - the report loop that traces the square cursor path
//!
//! All motion and report logic is host-testable via `lib.rs`; this file
//! is only hardware glue.

#![no_std]
#![no_main]

mod config;
mod error;
mod hid;
mod motion;
mod usb;

use defmt::info;
use defmt_rtt as _;
use embassy_executor::Spawner;
use embassy_nrf::peripherals;
use embassy_nrf::usb::vbus_detect::HardwareVbusDetect;
use embassy_nrf::usb::Driver;
use embassy_usb::class::hid::HidWriter;
use embassy_usb::UsbDevice;
use panic_probe as _;

use usb::hid_device::{self, UsbMouse};

type UsbDriver = Driver<'static, peripherals::USBD, HardwareVbusDetect>;

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("squaremouse starting");

    let p = embassy_nrf::init(Default::default());

    let UsbMouse {
        device,
        mouse_writer,
    } = hid_device::init(p.USBD);

    spawner.must_spawn(usb_task(device));
    spawner.must_spawn(mouse_task(mouse_writer));

    info!("USB ready - square path starts once the host connects");
}

#[embassy_executor::task]
async fn usb_task(device: UsbDevice<'static, UsbDriver>) -> ! {
    hid_device::run_usb_device(device).await
}

#[embassy_executor::task]
async fn mouse_task(writer: HidWriter<'static, UsbDriver, 8>) -> ! {
    hid_device::square_report_task(writer).await
}
