/*!

This is the long-form manual for `vote_codec` and `bmdcodec`.

## Ballot payload

The QR code printed on a ballot contains four fields separated by dots:

```text
<ballot style id>.<precinct id>.<encoded votes>.<serial number>
```

- the ballot style and precinct identifiers come from the election definition
  and may not contain a dot.
- the serial number is 16 random bytes in URL-safe base64 without padding.
  It is generated by the caller with [random_serial_number](crate::payload::random_serial_number),
  every time the ballot is printed.
- the encoded votes are described below.

## Encoded votes, version 1

The encoded votes are a sequence of bytes written in URL-safe base64 without
padding (`A-Z a-z 0-9 - _`). They never contain a dot, whatever the voter
typed in a write-in.

The bytes are read as a stream of bits, most significant bit first:

| field | width (bits) |
|-------|--------------|
| version | 8 |
| contest slots | see below, one per contest |
| padding to the next byte | 0-7, all zeros |
| write-in texts | length-prefixed, see below |

The contests are taken in the order returned by
[resolve_contests](crate::schema::resolve_contests), which is the order of the
election definition. Each contest always takes a slot, even when the voter did
not make a selection.

With `width(n)` the number of bits needed to write the number `n`:

**Yes/no contests** take 2 bits: `0` no selection, `1` yes, `2` no.

**Candidate contests** with `S` seats and `N` candidates:
- the number of selections, on `width(S)` bits. Zero means no selection.
- then for each selection, in the order the voter made them, `width(N)` bits:
  the position of the candidate in the list of candidates of the contest, or
  `N` for a write-in.

**Write-in texts** follow the padding, in the order in which the write-in
markers appear. Each text is its length in bytes as an unsigned LEB128 number,
followed by the UTF-8 bytes.

Nothing may follow the last write-in.

### Example

For the contests `[president (candidates A, B; 1 seat), prop1 (yes/no)]` and the
votes `{president: [B], prop1: yes}`:

| field | bits |
|-------|------|
| version 1 | `00000001` |
| president: 1 selection | `1` |
| president: candidate #1 (B) | `01` |
| prop1: yes | `01` |
| padding | `000` |

The bytes `01 A8` are encoded as `Aag`. With ballot style `12` and precinct `23`,
the QR code contains `12.23.Aag.<serial number>`.

## Errors

- `Schema`: the ballot style, precinct or activation code do not match the
  election definition.
- `InvariantViolation`: the votes break a rule of the contest (too many
  selections, unknown or repeated candidate, write-in where not allowed, yes/no
  vote for a candidate contest...). Nothing should be printed.
- `MalformedInput`: the encoded ballot cannot be read with these contests. The
  ballot must be adjudicated by hand.
- `UnsupportedVersion`: the encoded ballot starts with a version other than 1.

## Configuration

`bmdcodec` reads election definitions in JSON:

```text
{
  "title": "General Election",
  "parties": [{"id": "0", "name": "Federalist"}],
  "districts": [{"id": "district-1", "name": "City"}],
  "precincts": [{"id": "23", "name": "Center Springfield"}],
  "ballotStyles": [{"id": "12", "districts": ["district-1"], "precincts": ["23"]}],
  "contests": [
    {"id": "president", "type": "candidate", "title": "President", "districtId": "district-1",
     "seats": 1, "allowWriteIns": false,
     "candidates": [{"id": "alice", "name": "Alice", "partyId": "0"}]},
    {"id": "prop-1", "type": "yesno", "title": "Proposition 1", "shortTitle": "Prop 1",
     "districtId": "district-1"}
  ]
}
```

Votes are read in the following format. Candidates are referred to by id,
write-ins are objects:

```text
{
  "president": ["alice"],
  "city-council": ["carol", {"writeIn": "Mickey Mouse"}],
  "prop-1": "yes",
  "measure-2": null
}
```

*/
