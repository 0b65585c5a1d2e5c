mod codec;
mod roundtrip;
