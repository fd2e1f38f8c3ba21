//! pfb-json contains the JSON schemas used by pfb-fabric.
//!
//! There are two groups of schemas. The netlist schemas describe the hardware
//! design (block instances, streaming links and data converters) and are read
//! once at startup. The API schemas correspond to the requests and responses of
//! the HTTP server.

#![warn(missing_docs)]

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

macro_rules! impl_str_conv {
    ($ty:ty, $($s:expr => $v:ident),*) => {
        impl std::str::FromStr for $ty {
            type Err = ();

            fn from_str(s: &str) -> Result<Self, ()> {
                Ok(match s {
                    $(
                        $s => <$ty>::$v,
                    )*
                        _ => return Err(()),
                })
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
                write!(f, "{}", match self {
                    $(
                        <$ty>::$v => $s,
                    )*
                })
            }
        }
    }
}

macro_rules! get_fields {
    ($struct:ident, $x:expr, $($field:ident),*) => {
        $struct {
            $(
                $field: Some($x.$field),
            )*
        }
    }
}

/// Netlist JSON schema.
///
/// This describes a hardware design: the IP block instances, the streaming
/// links between their ports, and the enabled data converters.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Netlist {
    /// Block instances.
    pub blocks: Vec<Block>,
    /// Directed streaming links.
    pub edges: Vec<Edge>,
    /// Enabled ADCs.
    #[serde(default)]
    pub adcs: Vec<Converter>,
    /// Enabled DACs.
    #[serde(default)]
    pub dacs: Vec<Converter>,
}

/// Block instance JSON schema.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct Block {
    /// Instance name.
    pub name: String,
    /// Block type identifier.
    ///
    /// This is either a full `vendor:library:name:version` identifier or only
    /// the `name` component.
    #[serde(rename = "type")]
    pub block_type: String,
    /// Integer generics of the instance (channel count, lanes, bus widths).
    #[serde(default)]
    pub parameters: BTreeMap<String, i64>,
}

/// Streaming link JSON schema.
///
/// The `src` port is an output (master) port and the `dst` port is an input
/// (slave) port.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct Edge {
    /// Driving port.
    pub src: PortRef,
    /// Driven port.
    pub dst: PortRef,
}

/// Reference to a port of a block instance.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PortRef {
    /// Block instance name.
    pub block: String,
    /// Port name.
    pub port: String,
}

/// Data converter JSON schema.
///
/// Describes one enabled ADC or DAC channel of the RF data converter.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Converter {
    /// Converter id, formed by the tile and channel digits (for instance `"20"`).
    pub id: String,
    /// Converter sampling frequency in MHz.
    pub sampling_frequency: f64,
    /// Decimation (ADC) or interpolation (DAC) factor.
    #[serde(default = "default_factor")]
    pub factor: u32,
    /// Nyquist zone.
    #[serde(default = "default_nyquist_zone")]
    pub nyquist_zone: u8,
    /// Mixer settings.
    #[serde(default)]
    pub mixer: Mixer,
}

fn default_factor() -> u32 {
    1
}

fn default_nyquist_zone() -> u8 {
    1
}

/// Mixer JSON schema.
///
/// This JSON schema corresponds to GET requests on
/// `/api/chains/{kind}/{index}/mixer` and to the mixer settings of a converter
/// in the netlist.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Mixer {
    /// Mixer type.
    pub mixer_type: MixerType,
    /// Mixer mode.
    pub mode: MixerMode,
    /// Event source used to apply mixer updates.
    pub event_source: MixerEventSource,
    /// Mixer frequency in MHz.
    pub frequency: f64,
}

/// Mixer PATCH JSON schema.
///
/// This JSON schema corresponds to PATCH requests on
/// `/api/chains/{kind}/{index}/mixer`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct PatchMixer {
    /// Mixer frequency in MHz.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency: Option<f64>,
}

impl From<Mixer> for PatchMixer {
    fn from(val: Mixer) -> PatchMixer {
        get_fields!(PatchMixer, val, frequency)
    }
}

/// Mixer type.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum MixerType {
    /// Coarse mixer (fixed fraction of the sample rate).
    Coarse,
    /// Fine mixer (programmable NCO).
    Fine,
    /// Mixer bypassed.
    #[default]
    Off,
}

impl_str_conv!(MixerType,
               "coarse" => Coarse,
               "fine" => Fine,
               "off" => Off);

/// Mixer mode.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum MixerMode {
    /// Mixer off.
    #[default]
    Off,
    /// Complex input to complex output.
    ComplexToComplex,
    /// Complex input to real output.
    ComplexToReal,
    /// Real input to complex output.
    RealToComplex,
    /// Real input to real output.
    RealToReal,
}

impl_str_conv!(MixerMode,
               "off" => Off,
               "complex2complex" => ComplexToComplex,
               "complex2real" => ComplexToReal,
               "real2complex" => RealToComplex,
               "real2real" => RealToReal);

/// Mixer update event source.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum MixerEventSource {
    /// Updates are applied immediately.
    #[default]
    Immediate,
    /// Updates are applied by a slice event.
    Slice,
    /// Updates are applied by a tile event.
    Tile,
    /// Updates are applied on SYSREF.
    Sysref,
    /// Updates are applied on a marker.
    Marker,
    /// Updates are applied by the programmable logic.
    Pl,
}

impl_str_conv!(MixerEventSource,
               "immediate" => Immediate,
               "slice" => Slice,
               "tile" => Tile,
               "sysref" => Sysref,
               "marker" => Marker,
               "pl" => Pl);

/// Direction of a signal chain.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ChainDirection {
    /// ADC to channelizer to DMA or emulation block.
    Analysis,
    /// Oscillator or emulation block to channelizer to DAC.
    Synthesis,
}

impl_str_conv!(ChainDirection,
               "analysis" => Analysis,
               "synthesis" => Synthesis);

/// Chain subtype.
///
/// The subtype is given by the optional stages that a chain contains.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ChainSubtype {
    /// Private oscillator.
    Single,
    /// Dual oscillator shared with a chain of the other direction.
    Dual,
    /// Resonator emulation block shared with a chain of the other direction.
    Sim,
    /// Filter puncture block shared with a chain of the other direction.
    Filter,
}

impl_str_conv!(ChainSubtype,
               "single" => Single,
               "dual" => Dual,
               "sim" => Sim,
               "filter" => Filter);

/// Topology JSON schema.
///
/// This JSON schema corresponds to GET requests on `/api/topology`. It contains
/// every chain found in the netlist and the pairs formed by them.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Topology {
    /// Analysis chains.
    pub analysis: Vec<Chain>,
    /// Synthesis chains.
    pub synthesis: Vec<Chain>,
    /// Pairs sharing a dual oscillator.
    pub dual: Vec<ChainPair>,
    /// Pairs sharing a resonator emulation block.
    pub sim: Vec<ChainPair>,
    /// Pairs sharing a filter puncture block.
    pub filter: Vec<ChainPair>,
}

/// Chain JSON schema.
///
/// This JSON schema corresponds to GET requests on `/api/chains/{kind}/{index}`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Chain {
    /// Name of the channelizer block of the chain.
    pub name: String,
    /// Chain direction.
    pub direction: ChainDirection,
    /// Chain subtype.
    pub subtype: ChainSubtype,
    /// Converter id.
    pub converter: String,
    /// Converter tile.
    pub tile: u32,
    /// Converter channel.
    pub channel: u32,
    /// Chain sampling frequency in MHz.
    pub sampling_frequency: f64,
    /// Spacing between channel centers in MHz.
    pub channel_spacing: f64,
    /// Channel bandwidth in MHz, including the decimation of the chain.
    pub channel_bandwidth: f64,
    /// Number of channelizer channels.
    pub number_channels: u32,
    /// Ordered processing stages, excluding the channelizer.
    pub stages: Vec<Stage>,
    /// Mixer settings of the converter.
    pub mixer: Mixer,
}

/// Processing stage JSON schema.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct Stage {
    /// Block instance name.
    pub name: String,
    /// Block role.
    pub role: String,
}

/// Chain pair JSON schema.
///
/// The indices refer to the `analysis` and `synthesis` lists of the
/// [`Topology`].
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChainPair {
    /// Name of the shared block.
    pub shared_block: String,
    /// Index of the analysis chain.
    pub analysis: usize,
    /// Index of the synthesis chain.
    pub synthesis: usize,
}

/// Frequency query parameters.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FrequencyQuery {
    /// Frequency in MHz.
    pub frequency: f64,
}

/// Channel query parameters.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChannelQuery {
    /// Channelizer channel.
    pub channel: u32,
}

/// Channel mapping JSON schema.
///
/// This JSON schema is the response to the channel and frequency queries on a
/// chain.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ChannelMapping {
    /// Channelizer channel.
    pub channel: u32,
    /// Center frequency of the channel in MHz.
    pub center_frequency: f64,
}

/// Tone PUT JSON schema.
///
/// This JSON schema corresponds to PUT requests on
/// `/api/chains/synthesis/{index}/tone`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct PutTone {
    /// Tone frequency in MHz.
    pub frequency: f64,
    /// Tone gain in the range `[-1, 1)`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gain: Option<f64>,
    /// Compensation gain (dual oscillators only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compensation_gain: Option<f64>,
    /// Enable the compensation path (dual oscillators only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compensation: Option<bool>,
}

/// Tone JSON schema.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Tone {
    /// Tone frequency in MHz.
    pub frequency: f64,
    /// Channelizer channel that carries the tone.
    pub channel: u32,
    /// Residual frequency programmed in the channel oscillator in Hz.
    pub dds_frequency: f64,
    /// Tone gain.
    pub gain: f64,
}

/// Resonator emulation output selection.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum ResonatorOutput {
    /// Resonator model output.
    #[default]
    Resonator,
    /// Sweep oscillator output.
    Dds,
    /// Input pass-through.
    Input,
}

impl_str_conv!(ResonatorOutput,
               "resonator" => Resonator,
               "dds" => Dds,
               "input" => Input);

/// Resonator PUT JSON schema.
///
/// This JSON schema corresponds to PUT requests on `/api/sim/{index}/resonator`.
/// Only one of `nstep` and `dds_wait` should be given.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct PutResonator {
    /// Resonance frequency in MHz.
    pub frequency: f64,
    /// Maximum frequency excursion of the sweep in MHz.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sweep_frequency: Option<f64>,
    /// Sweep duration in µs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sweep_time: Option<f64>,
    /// Number of sweep steps.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nstep: Option<u32>,
    /// Wait cycles per sweep step.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dds_wait: Option<u32>,
    /// First IIR coefficient.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iir_c0: Option<f64>,
    /// Second IIR coefficient.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iir_c1: Option<f64>,
    /// Output selection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<ResonatorOutput>,
}

/// Resonator JSON schema.
///
/// This is the response to PUT requests on `/api/sim/{index}/resonator`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Resonator {
    /// Channelizer channel of the resonator.
    pub channel: u32,
    /// Residual oscillator frequency in MHz.
    pub dds_frequency: f64,
    /// Register values written to the emulation block.
    pub registers: ResonatorRegisters,
    /// Sweep duration in µs actually programmed.
    pub sweep_time: f64,
    /// Present when the requested sweep could not be expressed and the sweep
    /// duration was corrected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corrected_sweep_time: Option<f64>,
}

/// Register values of a resonator emulation lane.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResonatorRegisters {
    /// Sweep end value.
    pub dds_bval: u32,
    /// Sweep increment per step.
    pub dds_slope: u32,
    /// Number of sweep steps.
    pub dds_steps: u32,
    /// Wait cycles per step.
    pub dds_wait: u32,
    /// Oscillator frequency word.
    pub dds_freq: u32,
    /// First IIR coefficient word.
    pub iir_c0: u32,
    /// Second IIR coefficient word.
    pub iir_c1: u32,
    /// IIR gain word.
    pub iir_g: u32,
    /// Output selection word.
    pub outsel: u32,
    /// Puncturing index.
    pub punct_id: u32,
    /// Lane address.
    pub addr: u32,
}

/// Filter band PUT JSON schema.
///
/// This JSON schema corresponds to PUT requests on `/api/filter/{index}/band`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PutFilterBand {
    /// Lower edge of the band in MHz.
    pub low: f64,
    /// Upper edge of the band in MHz.
    pub high: f64,
}

/// Filter band JSON schema.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct FilterBand {
    /// Channels that are let through.
    pub channels: Vec<u32>,
}

/// Versions JSON schema.
///
/// This JSON schema corresponds to GET requests on `/api/versions`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct Versions {
    /// pfb-fabric version.
    pub pfb_fabric_version: String,
    /// pfb-fabric git version.
    pub pfb_fabric_git: String,
}
